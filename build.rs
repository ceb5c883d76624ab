use image::GenericImageView;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Splash logo size in pixels, must match `LOGO_WIDTH` / `LOGO_HEIGHT` in src/logo.rs
const LOGO_WIDTH: u32 = 96;
const LOGO_HEIGHT: u32 = 32;

/// Convert PNG image to 1 bit per pixel at build time
///
/// Rows are padded to whole bytes, MSB is the leftmost pixel, a set bit is ink.
fn convert_image_to_binary(
    input_path: &str,
    output_path: &str,
    target_width: u32,
    target_height: u32,
    threshold: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", input_path);

    // Check if input file exists
    if !Path::new(input_path).exists() {
        println!("cargo:warning=Image file '{}' not found, splash logo disabled", input_path);
        // Create empty file so build doesn't fail
        let mut file = File::create(output_path)?;
        file.write_all(&[])?;
        return Ok(());
    }

    let img = image::open(input_path)?;

    // Calculate aspect-ratio-preserving dimensions
    let (orig_width, orig_height) = img.dimensions();
    let orig_ratio = orig_width as f32 / orig_height as f32;
    let target_ratio = target_width as f32 / target_height as f32;

    let (new_width, new_height) = if orig_ratio > target_ratio {
        // Image is wider than target - fit to width
        (target_width, (target_width as f32 / orig_ratio) as u32)
    } else {
        // Image is taller than target - fit to height
        ((target_height as f32 * orig_ratio) as u32, target_height)
    };

    let gray = img
        .resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
        .to_luma8();

    let bytes_per_row = target_width.div_ceil(8);
    let mut buffer = vec![0u8; (bytes_per_row * target_height) as usize];

    // Centre the resized image inside the target box
    let offset_x = (target_width - gray.width()) / 2;
    let offset_y = (target_height - gray.height()) / 2;

    for y in 0..target_height {
        for x in 0..target_width {
            let brightness = match (x.checked_sub(offset_x), y.checked_sub(offset_y)) {
                (Some(ix), Some(iy)) if ix < gray.width() && iy < gray.height() => {
                    gray.get_pixel(ix, iy)[0]
                }
                // Outside image bounds - paper
                _ => 255,
            };

            if brightness < threshold {
                let byte_index = (y * bytes_per_row + x / 8) as usize;
                buffer[byte_index] |= 1 << (7 - (x % 8));
            }
        }
    }

    let mut file = File::create(output_path)?;
    file.write_all(&buffer)?;

    println!(
        "cargo:warning=Splash logo converted: {}x{} -> {} bytes",
        target_width,
        target_height,
        buffer.len()
    );
    Ok(())
}

fn main() {
    // Only the ESP-IDF build has an IDF environment to forward; host builds
    // (library tests) skip it.
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let logo_output = format!("{}/logo.bin", out_dir);

    if let Err(e) = convert_image_to_binary(
        "logo.png",
        &logo_output,
        LOGO_WIDTH,
        LOGO_HEIGHT,
        128, // threshold (0-255, 128 = middle gray)
    ) {
        println!("cargo:warning=Failed to convert logo.png: {}", e);
        // Fall back to no logo rather than a half-written file
        let _ = File::create(&logo_output);
    }

    println!("cargo:rerun-if-changed=logo.png");
}
