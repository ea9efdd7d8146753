use crate::refs::{ObjectReferences, RefType};
use crate::RenderError;
use image::{ColorType, DynamicImage};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::{Path, PathBuf};

/// A raster image (typically the brand logo) to be embedded in the document.
/// RGB JPEGs are passed through untouched; everything else is re-encoded as
/// a flate-compressed RGB stream with an optional alpha soft mask.
pub enum ImageData {
    DirectlyEmbeddableJpeg(PathBuf),
    Decoded(DynamicImage),
}

pub struct Image {
    pub data: ImageData,
    /// intrinsic width, in pixels
    pub width: f32,
    /// intrinsic height, in pixels
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    /// Load a raster image from disk. The caller decides whether a missing
    /// file matters; a fixed-template logo that isn't present is simply not
    /// drawn.
    pub fn from_disk<P: AsRef<Path>>(path: P) -> Result<Image, RenderError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;

        let format = image::guess_format(&data)?;
        let decoded = image::load_from_memory_with_format(&data, format)?;

        match (format, decoded.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                let width = decoded.width() as f32;
                let height = decoded.height() as f32;

                Ok(Image {
                    data: ImageData::DirectlyEmbeddableJpeg(path.to_owned()),
                    width,
                    height,
                })
            }
            _ => Ok(Self::from_dynamic(decoded)),
        }
    }

    pub fn from_dynamic(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            data: ImageData::Decoded(image),
            width,
            height,
        }
    }

    fn encode(&self) -> Result<EncodeOutput, RenderError> {
        match &self.data {
            ImageData::DirectlyEmbeddableJpeg(path) => {
                let bytes = std::fs::read(path)?;
                Ok(EncodeOutput {
                    filter: Filter::DctDecode,
                    bytes,
                    mask: None,
                })
            }
            ImageData::Decoded(image) => {
                use image::GenericImageView;
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let id = refs.gen(RefType::Image(image_index));

        let encoded = self.encode()?;

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = &mask_id {
            image.s_mask(*mask_id);
        }

        image.finish();

        if let Some(mask_id) = mask_id {
            let mask = encoded.mask.as_ref().expect("mask bytes exist");
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
