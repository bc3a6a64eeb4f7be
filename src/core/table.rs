//! Console table rendering for employee records
//!
//! Fixed seven-column layout matching the directory record fields, with
//! column widths fitted to content and `N/A` for absent fields.

use crate::domain::Employee;

/// Column headers, in render order
pub const HEADERS: [&str; 7] = [
    "Emp ID",
    "Name",
    "Department",
    "Position",
    "Email",
    "Phone",
    "Hire Date",
];

fn row_cells(employee: &Employee) -> [&str; 7] {
    [
        employee.empid_display(),
        employee.name_display(),
        employee.department_display(),
        employee.position_display(),
        employee.email_display(),
        employee.phone_display(),
        employee.hire_date_display(),
    ]
}

/// Renders employee records as a console table
///
/// Returns an empty string for an empty slice; the caller is expected to show
/// an informational "no results" message instead of a bare header row.
pub fn render_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return String::new();
    }

    let mut widths: [usize; 7] = HEADERS.map(str::len);
    for employee in employees {
        for (width, cell) in widths.iter_mut().zip(row_cells(employee)) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    push_separator(&mut out, &widths);
    for employee in employees {
        push_row(&mut out, &row_cells(employee), &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 7], widths: &[usize; 7]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // Last column needs no padding
        if i < cells.len() - 1 {
            for _ in cell.len()..*width {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 7]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        for _ in 0..*width {
            out.push('-');
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(empid: &str, name: &str) -> Employee {
        Employee {
            empid: Some(empid.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_slice_renders_nothing() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_renders_header_separator_and_rows() {
        let rendered = render_table(&[employee("1042", "Jane Smith")]);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Emp ID"));
        assert!(lines[1].starts_with("------"));
        assert!(lines[2].starts_with("1042"));
        assert!(lines[2].contains("Jane Smith"));
    }

    #[test]
    fn test_absent_fields_render_as_na() {
        let rendered = render_table(&[Employee::default()]);
        let row = rendered.lines().nth(2).unwrap();
        assert_eq!(row.split_whitespace().collect::<Vec<_>>(), vec!["N/A"; 7]);
    }

    #[test]
    fn test_columns_widen_to_longest_cell() {
        let rendered = render_table(&[
            employee("7", "A"),
            employee("a-very-long-employee-id", "B"),
        ]);
        let lines: Vec<&str> = rendered.lines().collect();

        // Name column starts at the same offset in every row
        let name_col = lines[0].find("Name").unwrap();
        assert!(name_col > "a-very-long-employee-id".len());
        assert_eq!(lines[2].find('A').unwrap(), name_col);
        assert_eq!(lines[3].find('B').unwrap(), name_col);
    }
}
