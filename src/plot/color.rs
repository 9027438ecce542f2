use anyhow::Result;
use log::error;
use plotters::{prelude::*, style::FontStyle};

/// The generic `sans-serif` family only resolves to a regular face. Falls
/// back to `sans-serif` when this family is not installed.
pub static FONT_FAMILY: &str = "DejaVu Sans";
pub static TITLE_FONT_SIZE: i32 = 36;
pub static AXIS_DESC_FONT_SIZE: i32 = 28;
pub static LEGEND_FONT_SIZE: i32 = 24;
pub static TICK_FONT_SIZE: i32 = 20;
pub static STROKE_WIDTH: u32 = 3;
pub static MARKER_SIZE: i32 = 7;

pub fn get_color_from_label(label: &str) -> Result<RGBColor> {
    match label {
        "inc" => Ok(RGBColor(1, 6, 130)),
        "traditional" => Ok(RGBColor(163, 99, 2)),
        _ => {
            error!("unrecognized label for color (label={label})");
            anyhow::bail!("unrecognized label (label={label})");
        }
    }
}

pub fn bold_font(size: i32) -> FontDesc<'static> {
    (FONT_FAMILY, size).into_font().style(FontStyle::Bold)
}

pub fn regular_font(size: i32) -> FontDesc<'static> {
    (FONT_FAMILY, size).into_font()
}
