//! Handlers for the demo commands.

use anyhow::{Context, Result};

use super::DemoConfig;

pub fn echo(conf: &mut DemoConfig, args: &[String]) -> Result<()> {
    println!("{}", render_echo(conf, args));
    Ok(())
}

pub fn add(conf: &mut DemoConfig, args: &[String]) -> Result<()> {
    let sum = sum_args(args)?;
    println!("{:.*}", usize::from(conf.precision), sum);
    Ok(())
}

pub fn show_config(conf: &mut DemoConfig, _args: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(&*conf).context("failed to serialize config")?;
    println!("{json}");
    Ok(())
}

fn render_echo(conf: &DemoConfig, args: &[String]) -> String {
    let joined = args.join(&conf.separator);
    if conf.upper {
        joined.to_uppercase()
    } else {
        joined
    }
}

fn sum_args(args: &[String]) -> Result<f64> {
    args.iter().try_fold(0.0, |acc, raw| -> Result<f64> {
        let n: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("not a number: {raw:?}"))?;
        Ok(acc + n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn echo_uses_separator_and_case() {
        let conf = DemoConfig {
            upper: true,
            separator: "+".into(),
            ..DemoConfig::default()
        };
        assert_eq!(render_echo(&conf, &argv(&["a", "b"])), "A+B");
        assert_eq!(render_echo(&DemoConfig::default(), &argv(&["a", "b"])), "a b");
    }

    #[test]
    fn sums_numbers() {
        assert_eq!(sum_args(&argv(&["1", "2.5", "3"])).unwrap(), 6.5);
    }

    #[test]
    fn rejects_non_numbers() {
        let err = sum_args(&argv(&["1", "two"])).unwrap_err();
        assert_eq!(err.to_string(), "not a number: \"two\"");
    }
}
