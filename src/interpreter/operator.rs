use crate::error::RuntimeError;

/// Tie-breaking rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// The binary operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Looks up the operator written as `symbol`.
    ///
    /// Returns `None` for anything other than `+ - * / ^`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The source symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength: `+ -` bind loosest, `^` tightest.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
            Self::Pow => 4,
        }
    }

    /// Only exponentiation is right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Applies the operator as `lhs OP rhs`.
    ///
    /// # Parameters
    /// - `lhs`: The left-hand operand, i.e. the deeper value on the stack.
    /// - `rhs`: The right-hand operand, i.e. the most recently pushed value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use rpncalc::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 3.0).unwrap(), 7.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(lhs / rhs)
            },
            Self::Pow => Ok(lhs.powf(rhs)),
        }
    }
}
