mod util;
mod literals;
