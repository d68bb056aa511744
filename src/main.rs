// SPDX-License-Identifier: MPL-2.0
use iced_dots::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        pages: args.opt_value_from_str("--pages").unwrap_or(None),
        visible_dots: args.opt_value_from_str("--dots").unwrap_or(None),
    };

    app::run(flags)
}
