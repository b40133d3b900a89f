use crate::error::Error;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

/// Exact rational number, always stored in lowest terms with a positive
/// denominator. The representation is canonical, so derived equality is
/// rational equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// # Panics
    ///
    /// If `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Nearest double; precision is lost for very large terms.
    pub fn to_f64(&self) -> f64 {
        match (self.num.to_f64(), self.den.to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }
}

// exponents beyond this are rejected rather than expanded into huge integers
const MAX_EXPONENT: u32 = 400;

// "-12.5" -> -25/2, "2.5e-3" -> 1/400, exactly
fn parse_decimal(s: &str) -> Result<Fraction, Error> {
    let invalid = || Error::InvalidNumber(s.to_string());

    let (mantissa, exponent) = match s.trim().split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            let exponent = exponent.parse::<i32>().map_err(|_| invalid())?;
            (mantissa, exponent)
        }
        None => (s.trim(), 0),
    };
    if exponent.unsigned_abs() > MAX_EXPONENT {
        return Err(invalid());
    }

    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part
        .bytes()
        .chain(frac_part.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let parse = |part: &str| -> Result<BigInt, Error> {
        if part.is_empty() {
            return Ok(BigInt::zero());
        }
        BigInt::parse_bytes(part.as_bytes(), 10).ok_or_else(invalid)
    };

    let scale = num_traits::pow(BigInt::from(10u32), frac_part.len());
    let num = parse(int_part)? * &scale + parse(frac_part)?;
    let value = Fraction::new(if negative { -num } else { num }, scale);

    let power = Fraction::from(num_traits::pow(
        BigInt::from(10u32),
        exponent.unsigned_abs() as usize,
    ));
    if exponent < 0 {
        Ok(value / power)
    } else {
        Ok(value * power)
    }
}

impl FromStr for Fraction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.split_once('/') {
            None => parse_decimal(s),
            Some((num, den)) => {
                let num = parse_decimal(num)?;
                let den = parse_decimal(den)?;
                if den.is_zero() {
                    return Err(Error::ZeroDenominator(s.to_string()));
                }
                Ok(num / den)
            }
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Fraction {
            num: value,
            den: BigInt::one(),
        }
    }
}

/// Value of the shortest decimal that reads back as the same double, so a
/// typed `0.1` becomes `1/10` rather than the nearest binary fraction.
impl TryFrom<f64> for Fraction {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::InvalidNumber(value.to_string()));
        }
        // `Display` for f64 never switches to exponent notation
        parse_decimal(&value.to_string())
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + (-rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

/// # Panics
///
/// On division by zero, like the integer types.
impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(1)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = &self.num * &rhs.den;
        let b = &rhs.num * &self.den;
        a.cmp(&b)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
