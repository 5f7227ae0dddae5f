use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;

static PAREN: Lazy<Regex> = Lazy::new(|| 
    Regex::new(r"^\s*\((.*)\)\s*$").expect("valid regex")
);

// Parses `k` comma-separated values, optionally wrapped in parentheses: 
// `1,2,3` or `(1, 2, 3)`.
pub fn parse_tuple<T>(s: &str, k: usize) -> Result<Vec<T>, String>
where T: FromStr {
    let inner = match PAREN.captures(s) { 
        Some(c) => c.get(1).map_or("", |m| m.as_str()),
        None    => s
    };

    let items = inner.split(',').map(|t| t.trim()).collect::<Vec<_>>();
    if items.len() != k { 
        return Err(format!("expected {k} components, found {}: '{s}'", items.len()))
    }

    items.into_iter().map(|t| 
        t.parse::<T>().map_err(|_| format!("cannot parse '{t}' in '{s}'"))
    ).collect()
}
