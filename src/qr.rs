//! QR code rendering for the derived address.

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{Color, QrCode};

/// Default rendered edge length in pixels.
pub const DEFAULT_SIZE: u32 = 200;

/// Quiet zone around the terminal rendering, in modules.
const QUIET_ZONE: usize = 2;

/// A rendered QR code, kept in both output forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeImage {
    /// The encoded text
    pub payload: String,
    /// Requested edge length in pixels
    pub size: u32,
    /// SVG document no larger than `size` x `size`
    pub svg: String,
    /// Half-block rendering for terminals
    pub terminal: String,
}

impl CodeImage {
    /// Encodes `payload` and renders it at `size` pixels.
    pub fn render(payload: &str, size: u32) -> Result<Self, QrError> {
        let code = QrCode::new(payload)?;
        Ok(Self {
            payload: payload.to_owned(),
            size,
            svg: svg_from(&code, size),
            terminal: terminal_from(&code),
        })
    }
}

/// Renders `payload` as an SVG document fitting in `size` x `size` pixels.
pub fn render_svg(payload: &str, size: u32) -> Result<String, QrError> {
    let code = QrCode::new(payload)?;
    Ok(svg_from(&code, size))
}

/// Renders `payload` with Unicode half-block characters.
///
/// Two module rows share one text line, which keeps the code roughly
/// square in a terminal.
pub fn render_terminal(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload)?;
    Ok(terminal_from(&code))
}

fn svg_from(code: &QrCode, size: u32) -> String {
    code.render::<svg::Color>()
        .max_dimensions(size, size)
        .build()
}

fn terminal_from(code: &QrCode) -> String {
    let colors = code.to_colors();
    let width = code.width();
    let total_width = width + QUIET_ZONE * 2;

    let mut matrix: Vec<Vec<bool>> = Vec::with_capacity(total_width);
    for _ in 0..QUIET_ZONE {
        matrix.push(vec![false; total_width]);
    }
    for y in 0..width {
        let mut row = vec![false; QUIET_ZONE];
        row.extend((0..width).map(|x| colors[y * width + x] == Color::Dark));
        row.extend(vec![false; QUIET_ZONE]);
        matrix.push(row);
    }
    for _ in 0..QUIET_ZONE {
        matrix.push(vec![false; total_width]);
    }

    let height = matrix.len();
    let mut out = String::new();
    for y in (0..height).step_by(2) {
        for x in 0..total_width {
            let top = matrix[y][x];
            let bottom = y + 1 < height && matrix[y + 1][x];
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }
    out
}
