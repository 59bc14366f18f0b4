//! Pure conversion functions: TOML config structs + CLI flags -> library config.

use anyhow::{Result, bail};

use topf_persistence::{GlobalPeak, PersistenceConfig};

use crate::cli::CommonArgs;
use crate::config::PersistenceToml;

/// Parses a global peak convention name into the corresponding enum variant.
pub fn parse_global_peak(s: &str) -> Result<GlobalPeak> {
    match s.to_lowercase().as_str() {
        "range" => Ok(GlobalPeak::Range),
        "infinite" | "inf" => Ok(GlobalPeak::Infinite),
        other => bail!("unknown global peak convention: {other:?}"),
    }
}

/// Builds a `PersistenceConfig` from the TOML section, with CLI flags taking
/// precedence.
pub fn build_persistence_config(
    persistence: &PersistenceToml,
    args: &CommonArgs,
    diagram: bool,
) -> Result<PersistenceConfig> {
    let global_peak = if args.infinite {
        GlobalPeak::Infinite
    } else {
        parse_global_peak(&persistence.global_peak)?
    };

    let mut config = PersistenceConfig::new()
        .with_global_peak(global_peak)
        .with_diagram(diagram);
    if let Some(n) = args.n_peaks.or(persistence.n_peaks) {
        config = config.with_n_peaks(n);
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(n_peaks: Option<usize>, infinite: bool) -> CommonArgs {
        CommonArgs {
            input: None,
            config: None,
            n_peaks,
            infinite,
        }
    }

    #[test]
    fn test_parse_global_peak() {
        assert_eq!(parse_global_peak("range").unwrap(), GlobalPeak::Range);
        assert_eq!(parse_global_peak("Infinite").unwrap(), GlobalPeak::Infinite);
        assert_eq!(parse_global_peak("inf").unwrap(), GlobalPeak::Infinite);
        assert!(parse_global_peak("huge").is_err());
    }

    #[test]
    fn test_defaults() {
        let cfg = build_persistence_config(&PersistenceToml::default(), &args(None, false), false)
            .unwrap();
        assert_eq!(cfg, PersistenceConfig::default());
    }

    #[test]
    fn test_cli_overrides_toml() {
        let toml = PersistenceToml {
            global_peak: "range".to_string(),
            n_peaks: Some(5),
        };
        let cfg = build_persistence_config(&toml, &args(Some(2), true), true).unwrap();
        assert_eq!(cfg.global_peak(), GlobalPeak::Infinite);
        assert_eq!(cfg.n_peaks(), Some(2));
        assert!(cfg.diagram());
    }

    #[test]
    fn test_toml_used_without_flags() {
        let toml = PersistenceToml {
            global_peak: "infinite".to_string(),
            n_peaks: Some(4),
        };
        let cfg = build_persistence_config(&toml, &args(None, false), false).unwrap();
        assert_eq!(cfg.global_peak(), GlobalPeak::Infinite);
        assert_eq!(cfg.n_peaks(), Some(4));
    }

    #[test]
    fn test_zero_peaks_rejected() {
        let result =
            build_persistence_config(&PersistenceToml::default(), &args(Some(0), false), false);
        assert!(result.is_err());
    }
}
