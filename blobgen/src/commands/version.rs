use blobgen_core::Version;
use clap::{Args, Subcommand};
use eyre::{Context, Result};

#[derive(Args)]
pub struct VersionCommand {
    #[command(subcommand)]
    action: VersionAction,
}

#[derive(Subcommand)]
enum VersionAction {
    /// Pack a dotted version such as 2.1.3 into a u32
    Encode {
        /// Dotted version with 1 to 4 components, each 0-255
        version: String,
    },

    /// Unpack a u32 (decimal or 0x-prefixed hex) into its components
    Decode {
        #[arg(value_parser = parse_packed)]
        packed: u32,
    },
}

impl VersionCommand {
    pub fn run(&self) -> Result<()> {
        match &self.action {
            VersionAction::Encode { version } => {
                let parsed: Version = version
                    .parse()
                    .wrap_err_with(|| format!("invalid version '{}'", version))?;
                println!("{}", describe(&parsed));
            }
            VersionAction::Decode { packed } => {
                println!("{}", describe(&Version::from_packed(*packed)));
            }
        }
        Ok(())
    }
}

fn describe(version: &Version) -> String {
    let (major, minor, patch, build) = version.components();
    format!(
        "{} = {}.{}.{}.{} = {} (0x{:08x})",
        version,
        major,
        minor,
        patch,
        build,
        version.packed(),
        version.packed()
    )
}

fn parse_packed(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("'{}' is not a u32: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_packed() {
        assert_eq!(parse_packed("131331"), Ok(131331));
        assert_eq!(parse_packed("0x02010300"), Ok(33620736));
        assert!(parse_packed("-1").is_err());
        assert!(parse_packed("0xZZ").is_err());
    }

    #[test]
    fn test_describe() {
        let version: Version = "2.1.3".parse().unwrap();
        assert_eq!(describe(&version), "2.1.3 = 2.1.3.0 = 33620736 (0x02010300)");
        assert_eq!(
            describe(&Version::from_packed(131331)),
            "0.2.1.3 = 0.2.1.3 = 131331 (0x00020103)"
        );
    }
}
