//! Name transformations for generated accessors.

/// Convert a property name to an accessor suffix (e.g., "first_name" -> "FirstName").
///
/// The first character and every character following a run of `_` or `-`
/// are uppercased and the separators dropped; a trailing run keeps its last
/// separator. A `/` becomes `::` and uppercases the character after it.
pub fn camelize(s: &str) -> String {
    let namespaced = expand_namespace_separators(s);

    let mut result = String::with_capacity(namespaced.len());
    let mut chars = namespaced.chars().peekable();
    let mut at_start = true;

    while let Some(c) = chars.next() {
        if is_separator(c) {
            let mut last = c;
            while let Some(&next) = chars.peek() {
                if !is_separator(next) {
                    break;
                }
                last = next;
                chars.next();
            }
            match chars.next() {
                Some(next) => result.push(next.to_ascii_uppercase()),
                None => result.push(last),
            }
        } else if at_start {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
        at_start = false;
    }

    result
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

fn expand_namespace_separators(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '/' {
            result.push_str("::");
            if let Some(next) = chars.next() {
                result.push(next.to_ascii_uppercase());
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("name"), "Name");
        assert_eq!(camelize("firstName"), "FirstName");
        assert_eq!(camelize("first_name"), "FirstName");
        assert_eq!(camelize("emp_work_email"), "EmpWorkEmail");
        assert_eq!(camelize("job-title"), "JobTitle");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_camelize_separator_runs() {
        assert_eq!(camelize("a__b"), "AB");
        assert_eq!(camelize("_id"), "Id");
        assert_eq!(camelize("id_"), "Id_");
        assert_eq!(camelize("id__"), "Id_");
    }

    #[test]
    fn test_camelize_digits() {
        assert_eq!(camelize("address_2"), "Address2");
        assert_eq!(camelize("2fa_secret"), "2faSecret");
    }

    #[test]
    fn test_camelize_namespace() {
        assert_eq!(camelize("admin/user_group"), "Admin::UserGroup");
    }
}
