//! Scene description parser.
//!
//! A scene is a plain-text file with one directive per line. The first
//! character of the first word selects the field, the following words carry
//! the value:
//!
//! | Key | Field                         | Unit in file |
//! |-----|-------------------------------|--------------|
//! | `R` | physical radius               | km           |
//! | `M` | mass                          | kg           |
//! | `D` | sidereal rotation period      | hours        |
//! | `S` | terrain scale                 | -            |
//! | `T` | mean temperature              | °C           |
//! | `W` | water fraction                | `[0, 1]`     |
//! | `C` | surface directive (see below) | -            |
//!
//! `C terrestrial` keeps the terrestrial surface. Any other last word makes the
//! planet non-terrestrial; `C random` additionally picks a random base tint and
//! `C color <r> <g> <b>` sets the tint from 0–255 channel values.
//!
//! Fields not mentioned keep their [`PlanetParams::default`] values. Unknown
//! keys and blank lines are skipped.

use std::path::Path;

use rand::Rng;

use crate::error::SceneError;
use crate::params::PlanetParams;

const METERS_PER_KILOMETER: f64 = 1000.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Read and parse a scene file.
pub fn load_scene<R: Rng>(path: &Path, rng: &mut R) -> Result<PlanetParams, SceneError> {
    let text = std::fs::read_to_string(path).map_err(|source| SceneError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let params = parse_scene(&text, rng)?;
    log::info!("Loaded scene from {}", path.display());
    Ok(params)
}

/// Parse scene text into planet parameters.
///
/// `rng` is only consulted by the `C random` directive.
pub fn parse_scene<R: Rng>(text: &str, rng: &mut R) -> Result<PlanetParams, SceneError> {
    let mut params = PlanetParams::default();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let mut words = raw.split_whitespace();
        let Some(token) = words.next() else {
            continue;
        };
        let values: Vec<&str> = words.collect();
        let Some(key) = token.chars().next() else {
            continue;
        };

        match key {
            'R' => params.radius_m = number(line, key, &values)? * METERS_PER_KILOMETER,
            'M' => params.mass_kg = number(line, key, &values)?,
            'D' => params.day_s = number(line, key, &values)? * SECONDS_PER_HOUR,
            'S' => params.terrain_scale = number(line, key, &values)?,
            'T' => params.temperature_c = number(line, key, &values)?,
            'W' => params.water = number(line, key, &values)?,
            'C' => surface_directive(&mut params, line, &values, rng)?,
            _ => log::debug!("Skipping unknown scene directive {token:?} on line {line}"),
        }
    }

    Ok(params)
}

fn number(line: usize, key: char, values: &[&str]) -> Result<f64, SceneError> {
    let value = values
        .first()
        .ok_or(SceneError::MissingValue { line, key })?;
    parse_value(line, key, value)
}

fn parse_value(line: usize, key: char, value: &str) -> Result<f64, SceneError> {
    value
        .parse::<f64>()
        .map_err(|source| SceneError::InvalidNumber {
            line,
            key,
            value: value.to_string(),
            source,
        })
}

fn surface_directive<R: Rng>(
    params: &mut PlanetParams,
    line: usize,
    values: &[&str],
    rng: &mut R,
) -> Result<(), SceneError> {
    let Some(&last) = values.last() else {
        return Err(SceneError::MissingValue { line, key: 'C' });
    };

    if last != "terrestrial" {
        params.terrestrial = false;
    }

    if last == "random" {
        params.base_color = [
            rng.random_range(0..100u32) as f32 * 0.01,
            rng.random_range(0..100u32) as f32 * 0.01,
            rng.random_range(0..100u32) as f32 * 0.01,
        ];
    } else if values[0] == "color" {
        let [_, r, g, b] = values else {
            return Err(SceneError::MissingValue { line, key: 'C' });
        };
        params.base_color = [
            (parse_value(line, 'C', r)? / 255.0) as f32,
            (parse_value(line, 'C', g)? / 255.0) as f32,
            (parse_value(line, 'C', b)? / 255.0) as f32,
        ];
    }

    Ok(())
}
