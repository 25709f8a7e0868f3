//! Wiring for the ImagickPixel example pages.
//!
//! Each example is registered as a delegate that renders an HTML fragment
//! describing the pixel API call with the current parameter values. The
//! pixel library itself is an external collaborator; these pages showcase
//! its call surface, they do not reimplement it.

use std::sync::Arc;

use serde_yaml::Value;

use crate::inject::{InjectionParams, ParamBag};

use super::nav::PIXEL_EXAMPLES;

fn param_str(params: &ParamBag, name: &str, fallback: &str) -> String {
    match params.get(name) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => fallback.to_string(),
    }
}

fn param_num(params: &ParamBag, name: &str, fallback: f64) -> f64 {
    match params.get(name) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(fallback),
        _ => fallback,
    }
}

fn swatch(color: &str) -> String {
    format!(
        "<div class='swatch' style='width:60px;height:60px;border:1px solid #333;\
         background-color:{color};'></div>"
    )
}

fn render_get_color(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    format!(
        "<p><code>ImagickPixel::getColor()</code> decomposes <code>{color}</code> \
         into its r/g/b/a components.</p>{}",
        swatch(&color)
    )
}

fn render_get_color_as_string(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    format!(
        "<p><code>ImagickPixel::getColorAsString()</code> returns the canonical \
         string form of <code>{color}</code>.</p>{}",
        swatch(&color)
    )
}

fn render_get_color_value(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    format!(
        "<p><code>ImagickPixel::getColorValue(channel)</code> reads one \
         normalized channel of <code>{color}</code>.</p>{}",
        swatch(&color)
    )
}

fn render_get_color_value_quantum(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    format!(
        "<p><code>ImagickPixel::getColorValueQuantum(channel)</code> reads one \
         channel of <code>{color}</code> in quantum range.</p>{}",
        swatch(&color)
    )
}

fn render_get_hsl(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    format!(
        "<p><code>ImagickPixel::getHSL()</code> converts <code>{color}</code> to \
         hue/saturation/luminosity.</p>{}",
        swatch(&color)
    )
}

fn render_is_similar(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    let fuzz = param_num(params, "fuzz", 0.2);
    format!(
        "<p><code>ImagickPixel::isSimilar(color, fuzz)</code> \
         compares against <code>{color}</code> with fuzz <code>{fuzz}</code>.</p>{}",
        swatch(&color)
    )
}

fn render_set_color(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    format!(
        "<p><code>ImagickPixel::setColor(color)</code> sets the pixel to \
         <code>{color}</code>.</p>{}",
        swatch(&color)
    )
}

fn render_set_color_value(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    let value = param_num(params, "value", 0.5);
    format!(
        "<p><code>ImagickPixel::setColorValue(channel, value)</code> \
         sets one channel of <code>{color}</code> to <code>{value}</code>.</p>{}",
        swatch(&color)
    )
}

fn render_set_color_value_quantum(params: &ParamBag) -> String {
    let color = param_str(params, "color", "rgb(128, 128, 128)");
    let value = param_num(params, "value", 0.5);
    format!(
        "<p><code>ImagickPixel::setColorValueQuantum(channel, value)</code> \
         sets one channel of <code>{color}</code> to <code>{value}</code> in \
         quantum range.</p>{}",
        swatch(&color)
    )
}

fn render_set_hsl(params: &ParamBag) -> String {
    let hue = param_num(params, "hue", 0.6);
    let saturation = param_num(params, "saturation", 0.5);
    let luminosity = param_num(params, "luminosity", 0.5);
    let css = format!(
        "hsl({}, {}%, {}%)",
        (hue * 360.0).round(),
        (saturation * 100.0).round(),
        (luminosity * 100.0).round()
    );
    format!(
        "<p><code>ImagickPixel::setHSL(hue, saturation, luminosity)</code> \
         with <code>({hue}, {saturation}, {luminosity})</code>.</p>{}",
        swatch(&css)
    )
}

fn delegate_for(example: &str) -> fn(&ParamBag) -> String {
    match example {
        "getColor" => render_get_color,
        "getColorAsString" => render_get_color_as_string,
        "getColorValue" => render_get_color_value,
        "getColorValueQuantum" => render_get_color_value_quantum,
        "getHSL" => render_get_hsl,
        "isSimilar" => render_is_similar,
        "setColor" => render_set_color,
        "setColorValue" => render_set_color_value,
        "setColorValueQuantum" => render_set_color_value_quantum,
        "setHSL" => render_set_hsl,
        _ => unreachable!("every listed example has a renderer"),
    }
}

/// Builds the full injector wiring for the pixel demo: parameter defaults,
/// one delegate per example page, the deprecated-spelling alias, and a
/// prepare hook framing every example's output.
pub fn injection_params() -> InjectionParams {
    let mut params = InjectionParams::new()
        // The lowercase spelling the demo historically linked; kept as an
        // alias of the canonical method so old URLs still resolve.
        .alias("pixel.setcolorValueQuantum", "pixel.setColorValueQuantum")
        .define_param("color", Value::String("rgb(128, 128, 128)".to_string()))
        .define_param("fuzz", Value::from(0.2))
        .define_param("value", Value::from(0.5));

    for example in PIXEL_EXAMPLES {
        let canonical = if *example == "setcolorValueQuantum" {
            "setColorValueQuantum"
        } else {
            *example
        };

        let render = delegate_for(canonical);
        params = params
            .delegate(format!("pixel.{canonical}"), Arc::new(render))
            .prepare(
                format!("pixel.{canonical}"),
                Arc::new(|rendered| format!("<div class='demo-output'>{rendered}</div>")),
            );
    }

    params
}
