pub mod dump;
pub mod hexdump;
pub mod info;
pub mod verify;

use anyhow::{Result, anyhow};

/// Looks up `--name VALUE` in the argument list and parses VALUE.
fn parse_option<T>(args: &[String], name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(pos) = args.iter().position(|arg| arg == name) else {
        return Ok(None);
    };

    let value = args
        .get(pos + 1)
        .ok_or_else(|| anyhow!("Missing value for {}", name))?;
    let parsed = value
        .parse()
        .map_err(|e| anyhow!("Invalid value for {}: {:?} ({})", name, value, e))?;
    Ok(Some(parsed))
}

/// Fails on any argument not in `known` (flags) or `with_value` (options taking a value).
fn reject_unknown(args: &[String], known: &[&str], with_value: &[&str]) -> Result<()> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if with_value.contains(&arg.as_str()) {
            iter.next();
        } else if !known.contains(&arg.as_str()) {
            return Err(anyhow!("Unexpected argument '{}'", arg));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_option() {
        let list = args(&["--offset", "16", "--length", "8"]);
        assert_eq!(parse_option::<usize>(&list, "--offset").unwrap(), Some(16));
        assert_eq!(parse_option::<usize>(&list, "--length").unwrap(), Some(8));
        assert_eq!(parse_option::<usize>(&list, "--width").unwrap(), None);
    }

    #[test]
    fn test_parse_option_errors() {
        assert!(parse_option::<usize>(&args(&["--offset"]), "--offset").is_err());
        let err = parse_option::<usize>(&args(&["--offset", "x"]), "--offset").unwrap_err();
        assert!(err.to_string().contains("--offset"));
    }

    #[test]
    fn test_reject_unknown() {
        assert!(reject_unknown(&args(&["--json"]), &["--json"], &[]).is_ok());
        assert!(reject_unknown(&args(&["--offset", "--json"]), &[], &["--offset"]).is_ok());
        assert!(reject_unknown(&args(&["--yaml"]), &["--json"], &[]).is_err());
    }
}
