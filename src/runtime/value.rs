use serde::Serialize;

// console.log shows nested arrays this many levels deep before collapsing them to [Array]
const INSPECT_DEPTH: usize = 2;
// and at most this many items of a single array
const MAX_ARRAY_ITEMS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    // the elements a pattern or a spread walks over, None for values that are not iterable
    pub fn iter_elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::Array(items) => Some(items.clone()),
            Value::String(str) => Some(str.chars().map(|c| Value::String(c.to_string())).collect()),
            _ => None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }

    // how console.log prints a top level argument
    pub fn to_log_string(&self) -> String {
        match self {
            Value::String(str) => str.clone(),
            other => other.inspect()
        }
    }

    pub fn inspect(&self) -> String {
        self.inspect_at(0)
    }

    fn inspect_at(&self, depth: usize) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(str) => quote_string(str),
            Value::Array(items) if items.is_empty() => "[]".to_string(),
            Value::Array(_) if depth > INSPECT_DEPTH => "[Array]".to_string(),
            Value::Array(items) => {
                let mut parts = items.iter()
                    .take(MAX_ARRAY_ITEMS)
                    .map(|x| x.inspect_at(depth + 1))
                    .collect::<Vec<String>>();
                let hidden = items.len().saturating_sub(MAX_ARRAY_ITEMS);
                if hidden > 0 {
                    parts.push(format!("... {} more item{}", hidden, if hidden == 1 { "" } else { "s" }));
                }
                format!("[ {} ]", parts.join(", "))
            }
        }
    }
}

pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string()
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string()
    }
    let sign = if n < 0.0 { "-" } else { "" };
    // {:e} yields the shortest digits that round trip, e.g. 1.2345e20
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return n.to_string()
    };
    let digits = mantissa.replace('.', "");
    let exponent = match exponent.parse::<i32>() {
        Ok(exponent) => exponent,
        Err(_) => return n.to_string()
    };
    let k = digits.len() as i32;
    // the decimal point sits behind the first `point` digits
    let point = exponent + 1;
    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let exp_sign = if exponent < 0 { "-" } else { "+" };
        let (first, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() { first.to_string() } else { format!("{}.{}", first, rest) };
        format!("{}e{}{}", mantissa, exp_sign, exponent.abs())
    };
    format!("{}{}", sign, body)
}

// single quotes unless the content has them, then double quotes, then backticks
fn quote_string(str: &str) -> String {
    let quote = if !str.contains('\'') {
        '\''
    } else if !str.contains('"') {
        '"'
    } else if !str.contains('`') {
        '`'
    } else {
        '\''
    };
    let mut out = String::with_capacity(str.len() + 2);
    out.push(quote);
    for c in str.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(items: &[f64]) -> Value {
        Value::Array(items.iter().map(|x| Value::Number(*x)).collect())
    }

    #[test]
    fn should_print_top_level_strings_raw() {
        assert_eq!(Value::String("a".into()).to_log_string(), "a");
        assert_eq!(Value::Array(vec![Value::String("a".into())]).to_log_string(), "[ 'a' ]");
    }

    #[test]
    fn should_print_arrays_like_node() {
        assert_eq!(Value::Array(vec![]).inspect(), "[]");
        assert_eq!(nums(&[2.0, 3.0, 4.0]).inspect(), "[ 2, 3, 4 ]");
        let nested = Value::Array(vec![Value::Number(1.0), Value::Array(vec![nums(&[2.0]), Value::Number(3.0)])]);
        assert_eq!(nested.inspect(), "[ 1, [ [ 2 ], 3 ] ]");
    }

    #[test]
    fn should_collapse_deep_arrays() {
        let deep = Value::Array(vec![Value::Array(vec![Value::Array(vec![nums(&[1.0])])])]);
        assert_eq!(deep.inspect(), "[ [ [ [Array] ] ] ]");
    }

    #[test]
    fn should_truncate_long_arrays() {
        let long = nums(&vec![0.0; 102]);
        assert!(long.inspect().ends_with(", ... 2 more items ]"));
    }

    #[test]
    fn should_format_numbers() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn should_format_numbers_like_number_to_string() {
        assert_eq!(format_number(123456789012345678901.0), "123456789012345680000");
        assert_eq!(format_number(2f64.powi(60)), "1152921504606847000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1.5e300), "-1.5e+300");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.25e-7), "1.25e-7");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn should_pick_quotes() {
        assert_eq!(quote_string("it's"), "\"it's\"");
        assert_eq!(quote_string("a\nb"), "'a\\nb'");
        assert_eq!(quote_string("'\"`"), "'\\'\"`'");
        assert_eq!(quote_string("\0\u{b}\u{8}\u{7f}"), "'\\x00\\x0B\\b\\x7F'");
    }

    #[test]
    fn should_print_keywords() {
        let values = Value::Array(vec![Value::Undefined, Value::Null, Value::Boolean(true)]);
        assert_eq!(values.inspect(), "[ undefined, null, true ]");
    }

    #[test]
    fn should_iterate_strings_by_char() {
        let chars = Value::String("hé".into()).iter_elements().unwrap();
        assert_eq!(chars, vec![Value::String("h".into()), Value::String("é".into())]);
        assert!(Value::Number(1.0).iter_elements().is_none());
    }
}
