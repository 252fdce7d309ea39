use std::fmt::Display;
use itertools::Itertools;
use crate::IntoDigits;

fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') {
        format!("({s})")
    } else {
        s
    }
}

// Formats a linear combination `r₀x₀ + r₁x₁ + ...` from (x, r) pairs with non-zero r.
pub fn lc<X, R, S>(mut terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let mut res: Vec<String> = vec![];

    if let Some((x, r)) = terms.next() {
        let r = paren_expr(r);
        let x = x.to_string();

        let term = if r == "1" {
            x
        } else if r == "-1" && x != "1" {
            format!("-{x}")
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(term)
    };

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = match r.strip_prefix('-') {
            Some(r) => ("-", r.to_owned()),
            None    => ("+", r)
        };

        let term = if x == "1" {
            r
        } else if r == "1" {
            x
        } else {
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    if res.is_empty() {
        String::from("0")
    } else {
        res.join(" ")
    }
}

pub fn subscript(i: isize) -> String {
    if i == 0 {
        return '\u{2080}'.into()
    }

    let init: String = if i > 0 { String::new() } else { '\u{208B}'.into() };

    i.unsigned_abs().into_digits().into_iter().fold(init, |mut res, d| {
        res.extend(char::from_u32( ('\u{2080}' as u32) + (d as u32) ));
        res
    })
}

pub fn superscript(i: isize) -> String {
    if i == 0 {
        return '\u{2070}'.into()
    }

    let init: String = if i > 0 { String::new() } else { '\u{207B}'.into() };

    i.unsigned_abs().into_digits().into_iter().fold(init, |mut res, d| {
        let c = match d {
            1 => Some('\u{00B9}'),
            2 => Some('\u{00B2}'),
            3 => Some('\u{00B3}'),
            _ => char::from_u32(('\u{2070}' as u32) + (d as u32))
        };
        res.extend(c);
        res
    })
}

// A two-column table of (name, value) rows.
pub fn table<S, I, D>(head: (S, S), rows: I) -> String
where
    S: Display,
    D: Display,
    I: IntoIterator<Item = (S, D)>,
{
    use prettytable::*;

    let mut table = Table::new();

    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(Row::new(vec![
        Cell::new(&head.0.to_string()),
        Cell::new(&head.1.to_string())
    ]));

    for (name, value) in rows {
        table.add_row(Row::new(vec![
            Cell::new(&name.to_string()),
            Cell::new(&value.to_string())
        ]));
    }

    table.to_string()
}

pub fn seq<S, I>(items: I) -> String
where S: Display, I: IntoIterator<Item = S> {
    format!("[{}]", items.into_iter().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscript() {
        assert_eq!(subscript(0), "₀");
        assert_eq!(subscript(1234567890), "₁₂₃₄₅₆₇₈₉₀");
        assert_eq!(subscript(-1234567890), "₋₁₂₃₄₅₆₇₈₉₀");
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(1234567890), "¹²³⁴⁵⁶⁷⁸⁹⁰");
        assert_eq!(superscript(-1234567890), "⁻¹²³⁴⁵⁶⁷⁸⁹⁰");
    }

    #[test]
    fn test_lc() {
        let terms = [("t²", 1), ("t", -1), ("1", 1)];
        assert_eq!(lc(terms.into_iter()), "t² - t + 1");

        let terms = [("t", -2), ("1", 3)];
        assert_eq!(lc(terms.into_iter()), "-2t + 3");

        let terms = [("1", -1)];
        assert_eq!(lc(terms.into_iter()), "-1");

        let terms: [(&str, i32); 0] = [];
        assert_eq!(lc(terms.into_iter()), "0");
    }

    #[test]
    fn test_seq() {
        assert_eq!(seq([1, -2, 3]), "[1, -2, 3]");
        assert_eq!(seq(Vec::<i32>::new()), "[]");
    }

    #[test]
    fn test_table() {
        let t = table(("name", "value"), [("genus", 1), ("signature", -2)]);
        assert!(t.contains("genus"));
        assert!(t.contains("-2"));
    }
}
