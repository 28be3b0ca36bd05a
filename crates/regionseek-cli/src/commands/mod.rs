pub mod config;
pub mod form;
pub mod replay;
pub mod select;
pub mod watch;

use regionseek_core::selection::{CropRect, Point};

fn parse_numbers<const N: usize>(s: &str) -> Result<[u32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated values, got '{s}'"));
    }
    let mut out = [0u32; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{part}' is not a non-negative integer"))?;
    }
    Ok(out)
}

/// Parse `x,y` canvas coordinates.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_numbers::<2>(s)?;
    Ok(Point::new(x, y))
}

/// Parse `x,y,w,h`.
pub fn parse_crop(s: &str) -> Result<CropRect, String> {
    let [x, y, w, h] = parse_numbers::<4>(s)?;
    Ok(CropRect::new(x, y, w, h))
}
