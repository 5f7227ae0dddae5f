use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

// Formats a linear combination of monomials, e.g. `2 - 3X + X²`.
// `x = "1"` marks the constant term. An empty combination prints as `0`.
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

        let term = if x == "1" {
            r
        } else if r == "1" { 
            x
        } else if r == "-1" { 
            format!("-{x}")
        } else { 
            format!("{r}{x}")
        };

        res.push(term)
    } else { 
        return String::from("0")
    };

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ("-", r.to_owned()) 
        } else { 
            ("+", r)
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

    res.join(" ")
}

// Maps the decimal rendering of `i` char by char. 
// Anything other than a digit or `-` is kept as is.
fn script<I, F>(i: I, digit: F, minus: char) -> String
where I: Display, F: Fn(u32) -> char {
    i.to_string().chars().map(|c| 
        match c { 
            '-' => minus,
            _   => c.to_digit(10).map_or(c, &digit)
        }
    ).collect()
}

pub fn superscript<I>(i: I) -> String 
where I: Display {
    script(i, |d| match d { 
        1 => '\u{00B9}',
        2 => '\u{00B2}',
        3 => '\u{00B3}',
        _ => char::from_u32('\u{2070}' as u32 + d).unwrap_or('?')
    }, '\u{207B}')
}
