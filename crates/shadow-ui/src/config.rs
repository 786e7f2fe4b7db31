/// Static demo site configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Sheet handed to the slot-based wrapper; host page styles must not reach it
    pub wrapper_styles: &'static str,

    /// Themes the portal page cycles through to exercise restyling
    pub themes: &'static [Theme],
}

pub struct Theme {
    pub name: &'static str,
    pub styles: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Shadow UI",
    tagline: "Style-isolated containers for Leptos",

    wrapper_styles: "p { color: crimson; font-family: monospace; margin: 0; }",

    themes: &[
        Theme {
            name: "plain",
            styles: "",
        },
        Theme {
            name: "paper",
            styles: "button { background: #fdf6e3; color: #586e75; border: 1px dashed #93a1a1; padding: 4px 12px; }",
        },
        Theme {
            name: "night",
            styles: "button { background: #002b36; color: #eee8d5; border: 1px solid #268bd2; padding: 4px 12px; }",
        },
    ],
};
