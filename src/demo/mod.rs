//! The demo application layer: navigation, page assembly and routing.

pub mod nav;
pub mod page;
pub mod pixel;

use serde_yaml::Value;

use crate::fault::{Fault, FaultContext, FaultHandler, Severity};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::inject::{ParamBag, ServiceRegistry, add_injection_params};

use nav::PixelNav;

/// Query parameters that must parse as numbers. A non-numeric value raises
/// a warning-level fault through the normalizer.
const NUMERIC_PARAMS: &[&str] = &["fuzz", "value", "hue", "saturation", "luminosity"];

/// Routes one request to a demo page.
///
/// `Ok(None)` means no route matched (the caller answers 404). An `Err`
/// after a fatal fault was recorded in `ctx` means the terminal hook owns
/// the client-facing report.
pub fn route(request: &Request, ctx: &mut FaultContext) -> anyhow::Result<Option<Response>> {
    let handler = FaultHandler::new();
    let mut registry = ServiceRegistry::new();
    let mut nav = PixelNav::new();

    add_injection_params(&mut registry, &pixel::injection_params())?;

    let path = request.path();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] | ["ImagickPixel"] => {
            nav.display_index(&mut registry)?;
            Ok(Some(index_page(&nav)))
        }
        ["ImagickPixel", example] => {
            example_page(example, request, &mut nav, &mut registry, ctx, &handler).map(Some)
        }
        _ => Ok(None),
    }
}

fn index_page(nav: &PixelNav) -> Response {
    let content = format!(
        "<p>Select an <code>ImagickPixel</code> method from the sidebar to \
         see it demonstrated. {} methods available.</p>",
        nav.examples().len()
    );

    Response::html(page::render_page(&nav.render_title(), &nav.render_nav(), &content))
}

fn example_page(
    example: &str,
    request: &Request,
    nav: &mut PixelNav,
    registry: &mut ServiceRegistry,
    ctx: &mut FaultContext,
    handler: &FaultHandler,
) -> anyhow::Result<Response> {
    if !nav.examples().contains(&example) {
        let fault = Fault::new(
            Severity::Error,
            format!("Example class 'pixel.{example}' not found"),
            file!(),
            line!(),
        );
        handler.handle(ctx, fault)?;
        anyhow::bail!("unrecoverable fault while selecting example '{example}'");
    }

    if example == "setcolorValueQuantum" {
        // Old spelling still resolves through the injector alias, but gets
        // flagged on the way.
        handler.handle(
            ctx,
            Fault::new(
                Severity::Deprecated,
                "setcolorValueQuantum is a deprecated spelling of setColorValueQuantum",
                file!(),
                line!(),
            ),
        )?;
    }

    nav.display(example, registry)?;

    let overrides = query_params(request, ctx, handler)?;

    let content = registry
        .make_with(nav::ACTIVE_EXAMPLE, &overrides)
        .ok_or_else(|| anyhow::anyhow!("no delegate registered for example '{example}'"))?;

    let html = page::render_page(&nav.render_title(), &nav.render_nav(), &content);
    Ok(Response::html(html))
}

/// Collects query-string overrides for the example's parameters.
///
/// Values for the known numeric parameters are validated here; a value that
/// does not parse goes through the normalizer as a warning, which raises.
fn query_params(
    request: &Request,
    ctx: &mut FaultContext,
    handler: &FaultHandler,
) -> anyhow::Result<ParamBag> {
    let mut bag = ParamBag::new();

    let Some(query) = request.query() else {
        return Ok(bag);
    };

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if NUMERIC_PARAMS.contains(&key.as_ref()) {
            match value.parse::<f64>() {
                Ok(n) => {
                    bag.insert(key.into_owned(), Value::from(n));
                }
                Err(_) => {
                    handler.handle(
                        ctx,
                        Fault::new(
                            Severity::Warning,
                            format!("Invalid numeric value '{value}' for parameter '{key}'"),
                            file!(),
                            line!(),
                        ),
                    )?;
                }
            }
        } else {
            bag.insert(key.into_owned(), Value::String(value.into_owned()));
        }
    }

    Ok(bag)
}
