use clap::Parser;
use printpanel::console::{read_stdin_line, Console, ConsoleFactory, StdinDialog};
use printpanel::{init_logging, BUILD_DATE, VERSION};
use printpanel_communication::{NoOpChannel, OctoPrintChannel, OctoPrintConfig, SharedChannel};
use printpanel_core::shared;
use printpanel_settings::{Config, SettingsManager, SettingsSource};
use printpanel_ui::{
    CalibrationScreen, ConfirmationDialog, PageContext, PageRegistry, SettingsScreen,
};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (.toml or .json); defaults to the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OctoPrint server URL
    #[arg(long)]
    url: Option<String>,

    /// OctoPrint API key
    #[arg(long)]
    api_key: Option<String>,

    /// Log commands instead of sending them to the printer
    #[arg(long)]
    dry_run: bool,

    /// Write logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Save the configuration, including command-line overrides, and continue
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.printer.base_url = url.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.printer.api_key = api_key.clone();
        }
        if self.dry_run {
            config.panel.dry_run = true;
        }
    }
}

fn connect(config: &Config) -> SharedChannel {
    if config.panel.dry_run {
        info!("Dry run: commands will not reach the printer");
        return shared(NoOpChannel::new());
    }

    let channel = OctoPrintChannel::new(OctoPrintConfig {
        base_url: config.printer.base_url.clone(),
        api_key: config.printer.api_key.clone(),
        timeout_ms: config.printer.timeout_ms,
    });
    if let Err(e) = channel.server_version() {
        warn!("OctoPrint at {} is not reachable yet: {}", channel.base_url(), e);
    }
    shared(channel)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut manager = match &args.config {
        Some(path) => SettingsManager::load(path)?,
        None => SettingsManager::load_default()?,
    };
    args.apply(manager.config_mut());
    manager.config().validate()?;

    init_logging(&manager.config().panel.log_level, args.log_json)?;
    info!("PrintPanel {} (built {})", VERSION, BUILD_DATE);
    match manager.source() {
        SettingsSource::File => info!("Loaded settings from {}", manager.path().display()),
        SettingsSource::Defaults => {
            info!("No settings at {}, using defaults", manager.path().display())
        }
    }

    if args.save_config {
        manager.save()?;
        info!("Configuration saved");
    }

    let channel = connect(manager.config());
    let dialog: Rc<dyn ConfirmationDialog> = Rc::new(StdinDialog);
    let factory = ConsoleFactory::new();

    let ctx = PageContext {
        channel: channel.clone(),
        dialog: dialog.clone(),
        factory: &factory,
    };
    let screen = CalibrationScreen::build(PageRegistry::calibration(), &ctx);
    let settings = SettingsScreen::new(channel, dialog);

    let mut console = Console::new(screen, settings, &factory, std::io::stdout());
    console.run(read_stdin_line)
}
