// SPDX-License-Identifier: MPL-2.0
use player_overlay::app::{self, Flags};

fn main() -> iced::Result {
    // Install logger immediately; the config sets the runtime max level once loaded.
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .try_init();
    log::set_max_level(log::LevelFilter::Warn);

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            log::warn!("ignoring --lang: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        }),
        no_portal: args.contains("--no-portal"),
        no_mouse_sync: args.contains("--no-mouse-sync"),
    };

    for unused in args.finish() {
        log::warn!("unrecognized argument: {}", unused.to_string_lossy());
    }

    app::run(flags)
}
