use std::{fmt, str::FromStr};

use log::trace;

use crate::error::{FormatSpecError, Result};

const DEFAULT_PRECISION: usize = 6;

/// Upper bound for a parsed width or precision, the limit std formatting accepts.
pub const MAX_FORMAT_ARGUMENT: usize = u16::MAX as usize;

// The exact decimal expansion of any `f32` (also as `f64`, or times 100) ends
// within this many digits, every digit past it is `0`.
const EXACT_DIGITS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits (`=`).
    AfterSign,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            '=' => Some(Align::AfterSign),
            _ => None,
        }
    }

    fn as_char(&self) -> char {
        match self {
            Align::Left => '<',
            Align::Right => '>',
            Align::Center => '^',
            Align::AfterSign => '=',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Only negative numbers get a sign.
    Minus,
    /// Every number gets a sign.
    Plus,
    /// Non-negative numbers get a leading space.
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Shortest representation that round-trips, or fixed point if a precision is set.
    ///
    /// The precision counts digits after the point like Rust's `{:.2}`, so `.2`
    /// renders `2.5` as `2.50`. Use [`Kind::General`] (`.2g`) for significant digits.
    Shortest,
    Fixed,
    /// Like `Fixed`, with `INF` and `NAN` in upper case.
    FixedUpper,
    Exponent,
    ExponentUpper,
    /// Precision is the number of significant digits. Picks fixed or exponent
    /// notation by magnitude and drops trailing zeros.
    General,
    GeneralUpper,
    /// Multiplies by 100 and renders fixed point followed by `%`.
    Percent,
}

impl Kind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'f' => Some(Kind::Fixed),
            'F' => Some(Kind::FixedUpper),
            'e' => Some(Kind::Exponent),
            'E' => Some(Kind::ExponentUpper),
            'g' | 'n' => Some(Kind::General),
            'G' => Some(Kind::GeneralUpper),
            '%' => Some(Kind::Percent),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Kind::Shortest => "",
            Kind::Fixed => "f",
            Kind::FixedUpper => "F",
            Kind::Exponent => "e",
            Kind::ExponentUpper => "E",
            Kind::General => "g",
            Kind::GeneralUpper => "G",
            Kind::Percent => "%",
        }
    }

    fn is_upper(&self) -> bool {
        matches!(
            self,
            Kind::FixedUpper | Kind::ExponentUpper | Kind::GeneralUpper
        )
    }
}

/// Describes how a single `f32` component is rendered.
///
/// Parsed from strings of the form
/// `[[fill]align][sign][0][width][grouping][.precision][type]`, for example
/// `".2"`, `">8.3f"`, `"*^10"`, `"+08.2"`, `",.1f"`, `".3g"` or `".1%"`. The
/// empty string yields the default spec.
///
/// Width and precision are limited to [`MAX_FORMAT_ARGUMENT`]. Exponents are
/// written the Rust way (`1.5e3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub sign: Sign,
    pub zero_pad: bool,
    pub width: Option<usize>,
    /// Thousands separator for the integer digits, `,` or `_`.
    pub grouping: Option<char>,
    pub precision: Option<usize>,
    pub kind: Kind,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            sign: Sign::Minus,
            zero_pad: false,
            width: None,
            grouping: None,
            precision: None,
            kind: Kind::Shortest,
        }
    }
}

impl FormatSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let chars: Vec<char> = spec.chars().collect();
        let mut result = Self::default();
        let mut idx = 0;
        let mut explicit_fill = false;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            result.fill = chars[0];
            result.align = Some(align);
            explicit_fill = true;
            idx = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            result.align = Some(align);
            idx = 1;
        }

        let sign = match chars.get(idx) {
            Some('+') => Some(Sign::Plus),
            Some('-') => Some(Sign::Minus),
            Some(' ') => Some(Sign::Space),
            _ => None,
        };
        if let Some(sign) = sign {
            result.sign = sign;
            idx += 1;
        }

        if chars.get(idx) == Some(&'0') {
            result.zero_pad = true;
            if result.align.is_some() && !explicit_fill {
                result.fill = '0';
            }
            idx += 1;
        }

        let width = take_digits(&chars, &mut idx);
        if !width.is_empty() {
            result.width = Some(
                parse_argument(&width)
                    .ok_or_else(|| FormatSpecError::InvalidWidth(width.clone()))?,
            );
        }

        if let Some(&c) = chars.get(idx) {
            if c == ',' || c == '_' {
                result.grouping = Some(c);
                idx += 1;
            }
        }

        if chars.get(idx) == Some(&'.') {
            idx += 1;
            let precision = take_digits(&chars, &mut idx);
            if precision.is_empty() {
                return Err(FormatSpecError::MissingPrecision);
            }
            result.precision = Some(
                parse_argument(&precision)
                    .ok_or_else(|| FormatSpecError::InvalidPrecision(precision.clone()))?,
            );
        }

        if let Some(&c) = chars.get(idx) {
            result.kind = match Kind::from_char(c) {
                Some(kind) => kind,
                None if c.is_alphabetic() => return Err(FormatSpecError::UnknownType(c)),
                None => {
                    return Err(FormatSpecError::TrailingCharacters(
                        chars[idx..].iter().collect(),
                    ));
                }
            };
            idx += 1;
        }

        if idx < chars.len() {
            return Err(FormatSpecError::TrailingCharacters(
                chars[idx..].iter().collect(),
            ));
        }

        trace!("Parsed format spec {:?} from `{}`", result, spec);
        Ok(result)
    }

    /// Takes fill, alignment, sign, zero padding, width and precision from a
    /// formatter. The kind is always [`Kind::Shortest`].
    ///
    /// As with Rust's own numbers, zero padding (`{:08}`) ignores the alignment.
    pub fn from_formatter(f: &fmt::Formatter<'_>) -> Self {
        let sign = if f.sign_plus() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let zero_pad = f.sign_aware_zero_pad();
        let align = if zero_pad {
            None
        } else {
            f.align().map(|align| match align {
                fmt::Alignment::Left => Align::Left,
                fmt::Alignment::Right => Align::Right,
                fmt::Alignment::Center => Align::Center,
            })
        };

        Self {
            fill: f.fill(),
            align,
            sign,
            zero_pad,
            width: f.width(),
            grouping: None,
            precision: f.precision(),
            kind: Kind::Shortest,
        }
    }

    /// Appends `value` rendered with this spec to `out`.
    pub fn write_f32(&self, out: &mut String, value: f32) {
        let negative = value.is_sign_negative() && !value.is_nan();
        let digits = self.digits(value.abs());
        let sign = match (negative, self.sign) {
            (true, _) => "-",
            (false, Sign::Plus) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Minus) => "",
        };
        let sign_len = sign.chars().count();
        let (align, fill) = self.alignment();

        let (integer, rest) = split_integer(&digits);
        if let (Align::AfterSign, '0', Some(separator), false) =
            (align, fill, self.grouping, integer.is_empty())
        {
            // zero padding takes part in the grouping
            let target = self
                .width
                .map_or(0, |width| width.saturating_sub(sign_len + rest.chars().count()));
            let mut count = integer.len();
            while count + (count - 1) / 3 < target {
                count += 1;
            }

            let mut padded = String::with_capacity(count);
            push_repeated(&mut padded, '0', count - integer.len());
            padded.push_str(integer);

            out.push_str(sign);
            out.push_str(&group(&padded, separator));
            out.push_str(rest);
            return;
        }

        let digits = match self.grouping {
            Some(separator) => format!("{}{}", group(integer, separator), rest),
            None => digits.clone(),
        };

        let len = sign_len + digits.chars().count();
        let pad = self.width.map_or(0, |width| width.saturating_sub(len));

        if align == Align::AfterSign {
            out.push_str(sign);
            push_repeated(out, fill, pad);
            out.push_str(&digits);
            return;
        }

        let (before, after) = match align {
            Align::Left => (0, pad),
            Align::Center => (pad / 2, pad - pad / 2),
            _ => (pad, 0),
        };
        push_repeated(out, fill, before);
        out.push_str(sign);
        out.push_str(&digits);
        push_repeated(out, fill, after);
    }

    pub fn format_f32(&self, value: f32) -> String {
        let mut out = String::new();
        self.write_f32(&mut out, value);
        out
    }

    /// Alignment and fill in effect, zero padding without an explicit alignment
    /// pads with `0` after the sign.
    fn alignment(&self) -> (Align, char) {
        match self.align {
            Some(align) => (align, self.fill),
            None if self.zero_pad => (Align::AfterSign, '0'),
            None => (Align::Right, self.fill),
        }
    }

    fn digits(&self, magnitude: f32) -> String {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        let value = f64::from(magnitude);

        let digits = match self.kind {
            Kind::Shortest => match self.precision {
                None => format!("{}", magnitude),
                Some(precision) => fixed(value, precision),
            },
            Kind::Fixed | Kind::FixedUpper => fixed(value, precision),
            Kind::Exponent | Kind::ExponentUpper => exponent(value, precision),
            Kind::General | Kind::GeneralUpper => general(value, self.precision),
            Kind::Percent => {
                let mut digits = fixed(value * 100.0, precision);
                digits.push('%');
                digits
            }
        };

        if self.kind.is_upper() {
            digits.to_uppercase()
        } else {
            digits
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatSpecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(align) = self.align {
            if self.fill != ' ' {
                write!(f, "{}", self.fill)?;
            }
            write!(f, "{}", align.as_char())?;
        }
        match self.sign {
            Sign::Minus => {}
            Sign::Plus => f.write_str("+")?,
            Sign::Space => f.write_str(" ")?,
        }
        if self.zero_pad {
            f.write_str("0")?;
        }
        if let Some(width) = self.width {
            write!(f, "{}", width)?;
        }
        if let Some(separator) = self.grouping {
            write!(f, "{}", separator)?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{}", precision)?;
        }
        f.write_str(self.kind.as_str())
    }
}

fn parse_argument(digits: &str) -> Option<usize> {
    digits
        .parse::<usize>()
        .ok()
        .filter(|value| *value <= MAX_FORMAT_ARGUMENT)
}

/// Fixed point with any precision, digits past [`EXACT_DIGITS`] are zeros.
fn fixed(value: f64, precision: usize) -> String {
    let mut out = format!("{:.*}", precision.min(EXACT_DIGITS), value);
    if precision > EXACT_DIGITS && value.is_finite() {
        push_repeated(&mut out, '0', precision - EXACT_DIGITS);
    }
    out
}

fn exponent(value: f64, precision: usize) -> String {
    let out = format!("{:.*e}", precision.min(EXACT_DIGITS), value);
    if precision <= EXACT_DIGITS || !value.is_finite() {
        return out;
    }

    match out.find('e') {
        Some(pos) => {
            let (mantissa, exp) = out.split_at(pos);
            let mut padded = String::with_capacity(precision + exp.len() + 2);
            padded.push_str(mantissa);
            push_repeated(&mut padded, '0', precision - EXACT_DIGITS);
            padded.push_str(exp);
            padded
        }
        None => out,
    }
}

fn general(value: f64, precision: Option<usize>) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let precision = precision.unwrap_or(DEFAULT_PRECISION).max(1);
    let scientific = exponent(value, precision - 1);
    let (mantissa, exp) = match scientific.find('e') {
        Some(pos) => (
            &scientific[..pos],
            scientific[pos + 1..].parse::<i64>().unwrap_or(0),
        ),
        None => (scientific.as_str(), 0),
    };

    if exp >= -4 && exp < precision as i64 {
        trim_fraction(&fixed(value, (precision as i64 - 1 - exp) as usize))
    } else {
        format!("{}e{}", trim_fraction(mantissa), exp)
    }
}

fn trim_fraction(digits: &str) -> String {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        digits.to_owned()
    }
}

/// Splits the leading integer digits from the rest (`"1234.5"` -> `"1234"`, `".5"`).
fn split_integer(digits: &str) -> (&str, &str) {
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or_else(|| digits.len());
    digits.split_at(end)
}

fn group(integer: &str, separator: char) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, c) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn take_digits(chars: &[char], idx: &mut usize) -> String {
    let start = *idx;
    while chars.get(*idx).map_or(false, |c| c.is_ascii_digit()) {
        *idx += 1;
    }
    chars[start..*idx].iter().collect()
}

fn push_repeated(out: &mut String, c: char, count: usize) {
    out.extend(std::iter::repeat(c).take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_parse_empty_is_default() {
        assert_eq!(FormatSpec::parse("").unwrap(), FormatSpec::default());
    }

    #[test]
    fn spec_parse_full() {
        let spec = FormatSpec::parse("*^+010_.3f").unwrap();

        assert_eq!(spec.fill, '*');
        assert_eq!(spec.align, Some(Align::Center));
        assert_eq!(spec.sign, Sign::Plus);
        assert!(spec.zero_pad);
        assert_eq!(spec.width, Some(10));
        assert_eq!(spec.grouping, Some('_'));
        assert_eq!(spec.precision, Some(3));
        assert_eq!(spec.kind, Kind::Fixed);
    }

    #[test]
    fn spec_parse_partial() {
        let spec: FormatSpec = ">8".parse().unwrap();
        assert_eq!(spec.fill, ' ');
        assert_eq!(spec.align, Some(Align::Right));
        assert_eq!(spec.width, Some(8));
        assert_eq!(spec.precision, None);

        let spec: FormatSpec = ".2".parse().unwrap();
        assert_eq!(spec.precision, Some(2));
        assert_eq!(spec.kind, Kind::Shortest);

        let spec: FormatSpec = " e".parse().unwrap();
        assert_eq!(spec.sign, Sign::Space);
        assert_eq!(spec.kind, Kind::Exponent);

        // a leading '<' is the alignment, not a fill character
        let spec: FormatSpec = "<5".parse().unwrap();
        assert_eq!(spec.fill, ' ');
        assert_eq!(spec.align, Some(Align::Left));

        // the zero flag fills with '0' unless a fill is given
        let spec: FormatSpec = "<06".parse().unwrap();
        assert_eq!(spec.fill, '0');
        assert_eq!(spec.align, Some(Align::Left));

        let spec: FormatSpec = "=+8".parse().unwrap();
        assert_eq!(spec.align, Some(Align::AfterSign));
        assert_eq!(spec.sign, Sign::Plus);
    }

    #[test]
    fn spec_parse_types() {
        let kind = |s: &str| FormatSpec::parse(s).unwrap().kind;

        assert_eq!(kind("f"), Kind::Fixed);
        assert_eq!(kind("F"), Kind::FixedUpper);
        assert_eq!(kind(".3e"), Kind::Exponent);
        assert_eq!(kind("E"), Kind::ExponentUpper);
        assert_eq!(kind("g"), Kind::General);
        assert_eq!(kind("n"), Kind::General);
        assert_eq!(kind(".4G"), Kind::GeneralUpper);
        assert_eq!(kind(".1%"), Kind::Percent);
    }

    #[test]
    fn spec_parse_errors() {
        assert_eq!(FormatSpec::parse(".f"), Err(FormatSpecError::MissingPrecision));
        assert_eq!(FormatSpec::parse("x"), Err(FormatSpecError::UnknownType('x')));
        assert_eq!(FormatSpec::parse(".2d"), Err(FormatSpecError::UnknownType('d')));
        assert_eq!(
            FormatSpec::parse("5.2fz"),
            Err(FormatSpecError::TrailingCharacters("z".to_owned()))
        );
        assert_eq!(
            FormatSpec::parse("5;"),
            Err(FormatSpecError::TrailingCharacters(";".to_owned()))
        );
        assert!(matches!(
            FormatSpec::parse("99999999999999999999999999"),
            Err(FormatSpecError::InvalidWidth(_))
        ));
        assert!(matches!(
            FormatSpec::parse(".99999999999999999999999999"),
            Err(FormatSpecError::InvalidPrecision(_))
        ));
    }

    #[test]
    fn spec_parse_bounds_width_and_precision() {
        assert_eq!(
            FormatSpec::parse(".70000f"),
            Err(FormatSpecError::InvalidPrecision("70000".to_owned()))
        );
        assert_eq!(
            FormatSpec::parse("70000"),
            Err(FormatSpecError::InvalidWidth("70000".to_owned()))
        );

        let spec = FormatSpec::parse("65535.65535f").unwrap();
        assert_eq!(spec.width, Some(MAX_FORMAT_ARGUMENT));
        assert_eq!(spec.precision, Some(MAX_FORMAT_ARGUMENT));
    }

    #[test]
    fn format_large_precision_without_panic() {
        let spec = FormatSpec::parse(".65535f").unwrap();
        let rendered = spec.format_f32(1.0);
        assert_eq!(rendered.len(), 2 + MAX_FORMAT_ARGUMENT);
        assert!(rendered.starts_with("1.000"));
        assert!(rendered[2..].chars().all(|c| c == '0'));

        // fields set by hand may go past the parse limit
        let spec = FormatSpec {
            precision: Some(70_000),
            kind: Kind::Exponent,
            ..FormatSpec::default()
        };
        let rendered = spec.format_f32(1.5);
        assert!(rendered.starts_with("1.5000"));
        assert!(rendered.ends_with("0e0"));
        assert_eq!(rendered.len(), 2 + 70_000 + 2);

        let spec = FormatSpec {
            precision: Some(70_000),
            ..FormatSpec::default()
        };
        assert_eq!(spec.format_f32(0.5).len(), 2 + 70_000);
        assert_eq!(spec.format_f32(f32::INFINITY), "inf");
    }

    #[test]
    fn spec_display_round_trips() {
        let specs = [
            "", ".2", ">8.3f", "*^10", "+08.2", " .3e", "<5E", "=+8", ",.1f", "_g", ".3%", "F",
        ];
        for s in specs.iter() {
            let spec = FormatSpec::parse(s).unwrap();
            assert_eq!(&spec.to_string(), s);
        }
    }

    #[test]
    fn format_shortest() {
        let spec = FormatSpec::default();

        assert_eq!(spec.format_f32(1.0), "1");
        assert_eq!(spec.format_f32(0.1), "0.1");
        assert_eq!(spec.format_f32(-500.0), "-500");
        assert_eq!(spec.format_f32(f32::NAN), "NaN");
        assert_eq!(spec.format_f32(f32::INFINITY), "inf");
        assert_eq!(spec.format_f32(f32::NEG_INFINITY), "-inf");
    }

    #[test]
    fn format_precision_and_kind() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse(".2").format_f32(2.5), "2.50");
        assert_eq!(parse("f").format_f32(1.0), "1.000000");
        assert_eq!(parse(".1f").format_f32(-0.3), "-0.3");
        assert_eq!(parse(".2e").format_f32(1500.0), "1.50e3");
        assert_eq!(parse(".1E").format_f32(0.00025), "2.5E-4");
        assert_eq!(parse("F").format_f32(f32::INFINITY), "INF");
        assert_eq!(parse("F").format_f32(f32::NAN), "NAN");
    }

    #[test]
    fn format_general() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse("g").format_f32(1.5), "1.5");
        assert_eq!(parse("g").format_f32(1234.5), "1234.5");
        assert_eq!(parse("g").format_f32(-3.75), "-3.75");
        assert_eq!(parse("g").format_f32(0.0), "0");
        assert_eq!(parse("g").format_f32(0.00001), "1e-5");
        assert_eq!(parse("g").format_f32(1e20), "1e20");
        assert_eq!(parse(".2g").format_f32(2.5), "2.5");
        assert_eq!(parse(".2g").format_f32(1234.5), "1.2e3");
        assert_eq!(parse(".3g").format_f32(1500.0), "1.5e3");
        assert_eq!(parse(".2g").format_f32(9.999), "10");
        assert_eq!(parse(".0g").format_f32(2.0), "2");
        assert_eq!(parse(".3G").format_f32(1500.0), "1.5E3");
        assert_eq!(parse("G").format_f32(f32::INFINITY), "INF");
        assert_eq!(parse("g").format_f32(f32::NAN), "NaN");
    }

    #[test]
    fn format_percent() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse("%").format_f32(0.25), "25.000000%");
        assert_eq!(parse(".1%").format_f32(-0.5), "-50.0%");
        assert_eq!(parse(".0%").format_f32(1.0), "100%");
        assert_eq!(parse("%").format_f32(f32::INFINITY), "inf%");
    }

    #[test]
    fn format_padding() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse("5").format_f32(1.0), "    1");
        assert_eq!(parse("<5").format_f32(1.0), "1    ");
        assert_eq!(parse("^5").format_f32(1.0), "  1  ");
        assert_eq!(parse("*^6").format_f32(2.5), "*2.5**");
        assert_eq!(parse("08.2").format_f32(-3.25), "-0003.25");
        assert_eq!(parse("06").format_f32(f32::INFINITY), "000inf");
        assert_eq!(parse("+").format_f32(1.0), "+1");
        assert_eq!(parse(" ").format_f32(1.0), " 1");
        assert_eq!(parse(" ").format_f32(-1.0), "-1");
        // width smaller than the number is ignored
        assert_eq!(parse("2").format_f32(-1234.0), "-1234");
    }

    #[test]
    fn format_align_after_sign() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse("=+8").format_f32(1.5), "+    1.5");
        assert_eq!(parse("=8").format_f32(-3.25), "-   3.25");
        assert_eq!(parse("+=8").format_f32(1234.5), "++1234.5");
        assert_eq!(parse("^06").format_f32(1.5), "01.500");
        assert_eq!(parse("<06").format_f32(1.5), "1.5000");
    }

    #[test]
    fn format_grouping() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse(",").format_f32(1234567.0), "1,234,567");
        assert_eq!(parse("_").format_f32(12345678.0), "12_345_678");
        assert_eq!(parse(",.1f").format_f32(-1234.5), "-1,234.5");
        assert_eq!(parse(",").format_f32(123.0), "123");
        assert_eq!(parse(",.2e").format_f32(1234.5), "1.23e3");
        assert_eq!(parse("x<10,").format_f32(1234.5), "1,234.5xxx");
        assert_eq!(parse("*=12,.1f").format_f32(1234.5), "*****1,234.5");
    }

    #[test]
    fn format_grouping_with_zero_padding() {
        let parse = |s: &str| FormatSpec::parse(s).unwrap();

        assert_eq!(parse("012,.1f").format_f32(1.5), "00,000,001.5");
        assert_eq!(parse("012,.1f").format_f32(1234.5), "00,001,234.5");
        assert_eq!(parse("0=12,.1f").format_f32(1234.5), "00,001,234.5");
        assert_eq!(parse("06,.1f").format_f32(1.5), "0,001.5");
        assert_eq!(parse("08,.1f").format_f32(1.5), "00,001.5");
        assert_eq!(parse("010_.2f").format_f32(1.5), "000_001.50");
        assert_eq!(parse("012,.1f").format_f32(f32::INFINITY), "000000000inf");
    }
}
