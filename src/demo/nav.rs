use crate::inject::{InjectError, Injector};

/// Injector slot for the example selected by the current request.
pub const ACTIVE_EXAMPLE: &str = "demo.active_example";
/// Injector slot for the navigation active on the current page.
pub const ACTIVE_NAV: &str = "demo.active_nav";
/// Concrete registry name of the pixel navigation itself.
pub const PIXEL_NAV: &str = "demo.pixel_nav";

/// The ImagickPixel methods the demo showcases. The names mirror the pixel
/// API surface; the library behind them is an external collaborator.
pub const PIXEL_EXAMPLES: &[&str] = &[
    "getColor",
    "getColorAsString",
    "getColorValue",
    "getColorValueQuantum",
    "getHSL",
    "isSimilar",
    "setColor",
    "setColorValue",
    "setcolorValueQuantum",
    "setHSL",
];

/// Sidebar navigation over the pixel demo methods.
#[derive(Debug, Default)]
pub struct PixelNav {
    current_example: Option<String>,
}

impl PixelNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn examples(&self) -> &'static [&'static str] {
        PIXEL_EXAMPLES
    }

    pub fn current_example(&self) -> Option<&str> {
        self.current_example.as_deref()
    }

    /// Renders the sidebar link list.
    pub fn render_nav(&self) -> String {
        let mut out = String::from("<ul class='nav nav-sidebar smallPadding'>");

        for example in PIXEL_EXAMPLES {
            out.push_str("<li>");
            out.push_str(&format!("<a href='/ImagickPixel/{example}'>{example}</a>"));
            out.push_str("</li>");
        }

        out.push_str("</ul>");
        out
    }

    /// Page title: the active example, or the API name on index pages.
    pub fn render_title(&self) -> String {
        match &self.current_example {
            Some(example) => example.clone(),
            None => "ImagickPixel".to_string(),
        }
    }

    /// Marks `example` active and registers it into the injector: the
    /// active-example slot is aliased to the example's registry name, the
    /// active-nav slot to this nav, and the nav is shared.
    pub fn display(&mut self, example: &str, injector: &mut dyn Injector) -> Result<(), InjectError> {
        self.current_example = Some(example.to_string());

        injector.alias(ACTIVE_EXAMPLE, &format!("pixel.{example}"))?;
        injector.alias(ACTIVE_NAV, PIXEL_NAV)?;
        injector.share(PIXEL_NAV)?;

        Ok(())
    }

    /// Registers this nav for an index page, with no active example.
    pub fn display_index(&mut self, injector: &mut dyn Injector) -> Result<(), InjectError> {
        injector.alias(ACTIVE_NAV, PIXEL_NAV)?;
        injector.share(PIXEL_NAV)?;

        Ok(())
    }
}
