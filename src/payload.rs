//! The hero card payload: a small JavaScript object describing a developer.

use crate::script::Script;
use std::time::Duration;

/// Lines typed out by the hero card.
pub const HERO_LINES: [&str; 11] = [
    "const developer = {",
    "  name: \"Hoeun Pichet\",",
    "  role: \"Full Stack Developer\",",
    "  skills: [",
    "    \"React\",",
    "    \"Next.js\",",
    "    \"TypeScript\",",
    "    \"Java\",",
    "    \"Spring Boot\"",
    "  ]",
    "};",
];

/// File name shown in the card's title row.
pub const HERO_FILE_NAME: &str = "developer.js";

/// Delay before the first character of the first cycle.
pub const HERO_START_DELAY: Duration = Duration::from_millis(1000);

/// The hero payload as a [`Script`].
pub fn hero_script() -> Script {
    Script::new(HERO_LINES)
}
