/// Keybinding reference shown in the help popup: (keys, action)
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("type", "Search stocks (suggestions appear after a pause)"),
    ("↓ / ↑", "Move through suggestions"),
    ("Enter", "Analyze selection (or raw text when nothing is selected)"),
    ("Tab", "Accept the highlighted suggestion"),
    ("Esc", "Close popup / leave the input field"),
    ("Ctrl+P", "Popular stocks (works with an empty input)"),
    ("Ctrl+T", "Theme aggregate for the typed name"),
    ("Ctrl+R", "Recent searches"),
    ("a", "Pin analyzed stock to the watchlist"),
    ("d", "Remove the highlighted watchlist row"),
    ("r", "Retry a failed analysis"),
    ("? / F1", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];
