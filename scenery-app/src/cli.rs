use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use scenery::WindowSettings;

/// Represents CLI arguments.
///
/// `-h` sets the window height, so clap's own `-h` help flag is disabled;
/// help is available as `help` or `--help`.
#[derive(Debug, Parser)]
#[command(
    name = "scenery-app",
    version,
    about = "Walled arena demo",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Arguments {
    /// Sets width of the window.
    #[arg(short = 'w', long = "width", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Sets height of the window.
    #[arg(short = 'h', long = "height", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Sets title of the window. Use `_` for spaces between words.
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Scene to load.
    #[arg(long, value_enum, default_value_t = SceneKind::Arena)]
    pub scene: SceneKind,

    /// Number of frames to run before exiting.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Print help.
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Subcommands>,
}

/// Represents available subcommands.
#[derive(Debug, Subcommand)]
pub enum Subcommands {
    /// Shows this help message.
    Help,
}

/// Scenes the game can start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// A single lit cube.
    Sandbox,
    /// Floor, four walls and obstacle boxes.
    Arena,
}

impl Arguments {
    /// Whether the user asked for the help text.
    pub fn wants_help(&self) -> bool {
        matches!(self.command, Some(Subcommands::Help))
    }

    /// Window title with `_` turned into spaces.
    pub fn window_title(&self) -> Option<String> {
        self.title.as_ref().map(|t| t.replace('_', " "))
    }

    /// Apply the overrides to `defaults`.
    pub fn window_settings(&self, defaults: WindowSettings) -> WindowSettings {
        let (width, height) = defaults.size;
        let mut settings = defaults.size(
            self.width.unwrap_or(width),
            self.height.unwrap_or(height),
        );
        if let Some(title) = self.window_title() {
            settings = settings.title(title);
        }
        settings
    }

    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_flags() {
        let args =
            Arguments::try_parse_from(["scenery-app", "-w", "800", "-h", "600", "-t", "My_Arena"])
                .unwrap();
        let settings = args.window_settings(WindowSettings::default());
        assert_eq!(settings.size, (800, 600));
        assert_eq!(settings.title, "My Arena");
        assert!(!args.wants_help());
    }

    #[test]
    fn test_defaults() {
        let args = Arguments::try_parse_from(["scenery-app"]).unwrap();
        assert_eq!(args.scene, SceneKind::Arena);
        assert_eq!(args.frames, 600);
        let settings = args.window_settings(WindowSettings::default().title("Base"));
        assert_eq!(settings.size, (1280, 720));
        assert_eq!(settings.title, "Base");
    }

    #[test]
    fn test_help_subcommand() {
        let args = Arguments::try_parse_from(["scenery-app", "help"]).unwrap();
        assert!(args.wants_help());
    }

    #[test]
    fn test_scene_selection() {
        let args = Arguments::try_parse_from(["scenery-app", "--scene", "sandbox"]).unwrap();
        assert_eq!(args.scene, SceneKind::Sandbox);
        assert!(Arguments::try_parse_from(["scenery-app", "--scene", "moon"]).is_err());
    }

    #[test]
    fn test_rejects_bad_width() {
        assert!(Arguments::try_parse_from(["scenery-app", "-w", "wide"]).is_err());
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(Arguments::try_parse_from(["scenery-app", "-w", "0"]).is_err());
        assert!(Arguments::try_parse_from(["scenery-app", "-h", "0"]).is_err());
        assert!(Arguments::try_parse_from(["scenery-app", "-w", "1", "-h", "1"]).is_ok());
    }
}
