//! Init command implementation.
//!
//! Writes a `txtshade.yaml` with the default render settings.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{RenderSettings, CONFIG_FILENAME};
use crate::error::{Result, ShadeError};
use crate::output::{display_path, Printer};

/// Initialize a txtshade.yaml settings file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to place the settings file in (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing txtshade.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ShadeError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let defaults = RenderSettings::default();

    // Build YAML manually for clean formatting and comments
    let mut yaml = String::new();
    yaml.push_str("# Output width in glyph columns\n");
    yaml.push_str(&format!("width: {}\n", defaults.width));
    yaml.push_str("# Vertical compensation for tall terminal glyph cells\n");
    yaml.push_str(&format!("aspect: {}\n", defaults.aspect));
    yaml.push_str("# Ordered glyph ramp, darkest first\n");
    yaml.push_str(&format!("ramp: \"{}\"\n", defaults.ramp));
    yaml.push_str("# Reverse the ramp for light-on-dark terminals\n");
    yaml.push_str(&format!("invert: {}\n", defaults.invert));
    yaml.push_str("# Equalize contrast and darken detected edges\n");
    yaml.push_str(&format!("enhance: {}\n", defaults.enhance));
    yaml.push_str("# Edge detection gradient thresholds\n");
    yaml.push_str(&format!("edge_low: {}\n", defaults.edge_low));
    yaml.push_str(&format!("edge_high: {}\n", defaults.edge_high));

    fs::write(&config_path, &yaml).map_err(|e| ShadeError::Io {
        path: config_path.clone(),
        message: format!("Failed to write settings: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_settings_file() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let config_path = dir.path().join(CONFIG_FILENAME);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("width: 80"));
        assert!(content.contains("ramp: \"@%#*+=-:. \""));
    }

    #[test]
    fn test_init_output_parses_back_to_defaults() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let loaded = RenderSettings::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        let defaults = RenderSettings::default();

        assert_eq!(loaded.width, defaults.width);
        assert_eq!(loaded.aspect, defaults.aspect);
        assert_eq!(loaded.ramp, defaults.ramp);
        assert_eq!(loaded.invert, defaults.invert);
        assert_eq!(loaded.enhance, defaults.enhance);
        assert_eq!(loaded.edge_low, defaults.edge_low);
        assert_eq!(loaded.edge_high, defaults.edge_high);
    }

    #[test]
    fn test_init_errors_if_settings_exist() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "width: 70").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(ShadeError::Config { .. })));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "width: 70").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(content.contains("width: 80"));
    }
}
