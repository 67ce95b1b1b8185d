// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Represents a currency: an ISO 4217 style code, its display symbol and its standard
//! number of decimal digits.

use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    str::FromStr,
    sync::OnceLock,
};

use monetary_core::correctness::{
    FAILED, check_in_range_inclusive_u8, check_nonempty_string, check_predicate_true,
    check_valid_string_ascii,
};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::registry::CurrencyRegistry;

/// The maximum number of decimal digits a currency may declare.
pub const MAX_DECIMAL_DIGITS: u8 = 28;

/// Represents a medium of exchange in a specified denomination.
///
/// Equality and hashing consider the `code` only, so two registries may carry differently
/// localized symbols for the same currency without breaking lookups.
#[derive(Clone, Copy, Eq, Serialize, Deserialize)]
#[serde(try_from = "CurrencyDefinition")]
pub struct Currency {
    /// The currency code as an alpha-3 string (e.g., "USD", "EUR").
    pub code: Ustr,
    /// The display symbol (e.g., "$", "€", "CHF").
    pub symbol: Ustr,
    /// The standard number of decimal digits for the currency.
    pub decimal_digits: u8,
    /// The full name of the currency.
    pub name: Ustr,
}

#[derive(Deserialize)]
struct CurrencyDefinition {
    code: String,
    symbol: String,
    decimal_digits: u8,
    #[serde(default)]
    name: String,
}

impl TryFrom<CurrencyDefinition> for Currency {
    type Error = anyhow::Error;

    fn try_from(value: CurrencyDefinition) -> Result<Self, Self::Error> {
        Self::new_checked(&value.code, &value.symbol, value.decimal_digits, &value.name)
    }
}

impl Currency {
    /// Creates a new [`Currency`] instance with correctness checking.
    ///
    /// The `code` is normalized to upper case.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code` is not exactly three ASCII letters.
    /// - `symbol` is empty.
    /// - `decimal_digits` exceeds [`MAX_DECIMAL_DIGITS`].
    pub fn new_checked<T: AsRef<str>>(
        code: T,
        symbol: T,
        decimal_digits: u8,
        name: T,
    ) -> anyhow::Result<Self> {
        let code = code.as_ref();
        check_valid_string_ascii(code, "code")?;
        check_predicate_true(
            code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()),
            &format!("invalid `code`, expected three ASCII letters, was '{code}'"),
        )?;
        check_nonempty_string(symbol.as_ref(), "symbol")?;
        check_in_range_inclusive_u8(decimal_digits, 0, MAX_DECIMAL_DIGITS, "decimal_digits")?;

        Ok(Self {
            code: Ustr::from(&code.to_ascii_uppercase()),
            symbol: Ustr::from(symbol.as_ref()),
            decimal_digits,
            name: Ustr::from(name.as_ref()),
        })
    }

    /// Creates a new [`Currency`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Currency::new_checked`] for more details.
    #[must_use]
    pub fn new<T: AsRef<str>>(code: T, symbol: T, decimal_digits: u8, name: T) -> Self {
        Self::new_checked(code, symbol, decimal_digits, name).expect(FAILED)
    }

    /// Returns a copy of this currency carrying a different display `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `symbol` is empty.
    pub fn with_symbol(self, symbol: &str) -> anyhow::Result<Self> {
        check_nonempty_string(symbol, "symbol")?;
        Ok(Self {
            symbol: Ustr::from(symbol),
            ..self
        })
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Debug for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(code='{}', symbol='{}', decimal_digits={}, name='{}')",
            stringify!(Currency),
            self.code,
            self.symbol,
            self.decimal_digits,
            self.name,
        )
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Currency {
    type Err = anyhow::Error;

    /// Looks the code up in the global default registry (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyRegistry::global()
            .get(s)
            .ok_or_else(|| anyhow::anyhow!("Unknown currency: {s}"))
    }
}

macro_rules! builtin_currencies {
    ($($code:ident => ($symbol:literal, $digits:literal, $name:literal)),+ $(,)?) => {
        #[allow(non_snake_case)]
        impl Currency {
            $(
                #[doc = concat!("Returns the built-in `", stringify!($code), "` currency (", $name, ").")]
                #[must_use]
                pub fn $code() -> Self {
                    static CURRENCY: OnceLock<Currency> = OnceLock::new();
                    *CURRENCY.get_or_init(|| {
                        Currency::new(stringify!($code), $symbol, $digits, $name)
                    })
                }
            )+
        }

        /// Returns every built-in currency, ordered by code.
        pub(crate) fn builtin_currencies() -> Vec<Currency> {
            vec![$(Currency::$code()),+]
        }
    };
}

builtin_currencies! {
    AUD => ("A$", 2, "Australian dollar"),
    BRL => ("R$", 2, "Brazilian real"),
    CAD => ("CA$", 2, "Canadian dollar"),
    CHF => ("CHF", 2, "Swiss franc"),
    CNY => ("CN¥", 2, "Chinese yuan"),
    CVE => ("CVE", 2, "Cape Verdean escudo"),
    DKK => ("kr.", 2, "Danish krone"),
    EUR => ("€", 2, "Euro"),
    GBP => ("£", 2, "British pound"),
    HKD => ("HK$", 2, "Hong Kong dollar"),
    INR => ("₹", 2, "Indian rupee"),
    JPY => ("¥", 0, "Japanese yen"),
    KRW => ("₩", 0, "South Korean won"),
    KWD => ("KWD", 3, "Kuwaiti dinar"),
    MXN => ("MX$", 2, "Mexican peso"),
    NOK => ("kr", 2, "Norwegian krone"),
    NZD => ("NZ$", 2, "New Zealand dollar"),
    SEK => ("kr", 2, "Swedish krona"),
    USD => ("$", 2, "United States dollar"),
    ZAR => ("R", 2, "South African rand"),
}
