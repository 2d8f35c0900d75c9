use serde_json::Value;

/// Parameter dictionary handed to a game factory.
///
/// Keys are parameter names, values are JSON scalars. Missing keys take the
/// game's defaults.
pub type Params = serde_json::Map<String, Value>;

/// A game name together with its parameters.
///
/// Written as `name` or `name(key=value,key=value)`, e.g.
/// `bertrand_oligopoly(players=3,imp_info=true)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameString {
    pub name: String,
    pub params: Params,
}

impl GameString {
    /// Interpret a raw parameter value: bool, integer, float, else string.
    fn scalar(raw: &str) -> Value {
        if raw.eq_ignore_ascii_case("true") {
            Value::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Value::Bool(false)
        } else if let Ok(int) = raw.parse::<i64>() {
            Value::from(int)
        } else if let Some(float) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
            Value::from(float)
        } else {
            Value::String(raw.to_string())
        }
    }
}

impl TryFrom<&str> for GameString {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (name, inner) = match s.split_once('(') {
            None => (s, ""),
            Some((name, rest)) => match rest.strip_suffix(')') {
                Some(inner) => (name, inner),
                None => anyhow::bail!("unbalanced parentheses in game string {:?}", s),
            },
        };
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("missing game name in {:?}", s);
        }
        let mut params = Params::new();
        for pair in inner.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, raw) = pair
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("expected key=value, found {:?}", pair))?;
            let key = key.trim();
            if key.is_empty() {
                anyhow::bail!("empty parameter name in {:?}", pair);
            }
            if params.insert(key.to_string(), Self::scalar(raw.trim())).is_some() {
                anyhow::bail!("parameter {:?} given twice", key);
            }
        }
        Ok(Self {
            name: name.to_string(),
            params,
        })
    }
}

impl std::fmt::Display for GameString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.params.is_empty() {
            return Ok(());
        }
        let pairs = self
            .params
            .iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={}", k, s),
                v => format!("{}={}", k, v),
            })
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "({})", pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name() {
        let game = GameString::try_from("bertrand_oligopoly").unwrap();
        assert_eq!(game.name, "bertrand_oligopoly");
        assert!(game.params.is_empty());
    }

    #[test]
    fn typed_values() {
        let game = GameString::try_from(
            "bertrand_oligopoly(players=3, imp_info=True, interval_size=0.2, returns_type=win_loss)",
        )
        .unwrap();
        assert_eq!(game.params["players"], Value::from(3));
        assert_eq!(game.params["imp_info"], Value::Bool(true));
        assert_eq!(game.params["interval_size"], Value::from(0.2));
        assert_eq!(game.params["returns_type"], Value::from("win_loss"));
    }

    #[test]
    fn display_is_parseable() {
        let game = GameString::try_from("g(b=false,a=2)").unwrap();
        assert_eq!(game.to_string(), "g(a=2,b=false)");
        assert_eq!(GameString::try_from(game.to_string().as_str()).unwrap(), game);
    }

    #[test]
    fn malformed() {
        assert!(GameString::try_from("g(players=2").is_err());
        assert!(GameString::try_from("g(players)").is_err());
        assert!(GameString::try_from("(players=2)").is_err());
        assert!(GameString::try_from("g(a=1,a=2)").is_err());
    }
}
