//! Order-preserving numeric filenames for album items.

use crate::url_model::{split_extension, ImageRef};

/// Renames each image to its 1-based position, zero-padded to the digit count
/// of `images.len()`, keeping the extension: 12 items become `01.jpg` … `12.jpg`.
pub fn numerate_images(images: &mut [ImageRef]) {
    let width = images.len().max(1).to_string().len();
    for (index, image) in images.iter_mut().enumerate() {
        let number = format!("{:0width$}", index + 1);
        let filename = match split_extension(image.filename()).1 {
            Some(ext) => format!("{number}.{ext}"),
            None => number,
        };
        image.set_filename(filename);
    }
}
