use image::{DynamicImage, Rgb, RgbImage};

use crate::raster::{Cell, Raster};

/// Colour written over path pixels.
const PATH_COLOUR: Rgb<u8> = Rgb([255, 0, 0]);

/// A [`Raster`] backed by an RGB pixel buffer loaded through the `image`
/// crate. Row padding, headers and file formats are the codec's business;
/// this type only classifies and recolours pixels.
#[derive(Clone, Debug)]
pub struct ImageRaster {
    img: RgbImage,
}

impl ImageRaster {
    /// Consume the raster and hand back the pixel buffer, e.g. for saving.
    pub fn into_inner(self) -> RgbImage {
        self.img
    }
}

impl Raster for ImageRaster {
    fn width(&self) -> usize {
        self.img.width() as usize
    }

    fn height(&self) -> usize {
        self.img.height() as usize
    }

    fn classify(&self, pixel: usize) -> Cell {
        let col = (pixel % self.width()) as u32;
        let row = (pixel / self.width()) as u32;

        let p = self.img.get_pixel(col, row);

        if p.0[0] < 128 {
            Cell::Wall
        } else {
            Cell::Open
        }
    }

    fn paint(&mut self, pixel: usize) {
        let col = (pixel % self.width()) as u32;
        let row = (pixel / self.width()) as u32;

        self.img.put_pixel(col, row, PATH_COLOUR);
    }
}

pub fn parse_img(img: &DynamicImage) -> Result<ImageRaster, anyhow::Error> {
    if img.width() == 0 || img.height() == 0 {
        return Err(anyhow::anyhow!("image has no pixels"));
    }

    Ok(ImageRaster {
        img: img.to_rgb8(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_by_two() -> ImageRaster {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        img.put_pixel(0, 1, Rgb([40, 40, 40]));
        img.put_pixel(1, 1, Rgb([200, 200, 200]));

        parse_img(&DynamicImage::ImageRgb8(img)).unwrap()
    }

    #[test]
    fn classification_thresholds_the_red_channel() {
        let maze = two_by_two();

        assert_eq!(maze.classify(0), Cell::Wall);
        assert_eq!(maze.classify(1), Cell::Open);
        assert_eq!(maze.classify(2), Cell::Wall);
        assert_eq!(maze.classify(3), Cell::Open);
    }

    #[test]
    fn paint_overwrites_only_the_given_pixel() {
        let mut maze = two_by_two();
        maze.paint(1);

        let img = maze.into_inner();
        assert_eq!(img.get_pixel(1, 0), &PATH_COLOUR);
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([200, 200, 200]));
    }

    #[test]
    fn parse_rejects_empty_images() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
        assert!(parse_img(&img).is_err());
    }
}
