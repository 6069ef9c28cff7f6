use std::collections::hash_map::{Entry, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::SceneConfig;
use crate::texture::crate_texture;

/// Name the renderer looks up for the cube shader and texture
pub const CUBE: &str = "cube";

/// Side of the generated texture used when no image file is configured
pub const FALLBACK_TEXTURE_SIZE: u32 = 256;

const BUILTIN_SHADERS: &[(&str, &str)] = &[("cube", include_str!("cube.wgsl"))];

/// Decoded RGBA8 texels, rows ordered bottom to top
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Decode any supported image format. Rows are flipped so that texture
    /// coordinate v = 0 samples the bottom of the picture.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .context("Failed to decode image")?
            .flipv()
            .to_rgba8();

        Ok(Self {
            width: img.width(),
            height: img.height(),
            rgba: img.into_raw(),
        })
    }

    pub fn checkerboard(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            rgba: crate_texture(size),
        }
    }

    /// Bytes per texel row, as the GPU upload needs it
    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }
}

/// Named shaders and textures, each name loaded at most once
#[derive(Debug)]
pub struct ResourceManager {
    root: PathBuf,
    shaders: HashMap<String, &'static str>,
    textures: HashMap<String, TextureData>,
}

impl ResourceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            shaders: HashMap::new(),
            textures: HashMap::new(),
        }
    }

    /// Cube shader plus the configured texture, or the checkerboard without one
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let mut resources = Self::new(&config.resource_root);
        resources.load_shader(CUBE, CUBE)?;

        match &config.texture {
            Some(path) => {
                let texture = resources.load_texture(CUBE, path)?;
                log::info!(
                    "Loaded texture {} ({}x{})",
                    path.display(),
                    texture.width,
                    texture.height
                );
            }
            None => {
                resources.insert_texture(CUBE, TextureData::checkerboard(FALLBACK_TEXTURE_SIZE))?;
            }
        }

        Ok(resources)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Register a built-in WGSL source under `name`
    pub fn load_shader(&mut self, name: &str, source: &str) -> Result<&'static str> {
        let Some((_, wgsl)) = BUILTIN_SHADERS.iter().find(|(id, _)| *id == source) else {
            bail!("Unknown shader source '{}'", source);
        };

        match self.shaders.entry(name.to_string()) {
            Entry::Occupied(_) => {
                bail!("Could not load shader '{}': a shader with this name already exists", name)
            }
            Entry::Vacant(slot) => Ok(*slot.insert(*wgsl)),
        }
    }

    pub fn get_shader(&self, name: &str) -> Option<&'static str> {
        self.shaders.get(name).copied()
    }

    /// Read and decode `relative_path` under the resource root
    pub fn load_texture(&mut self, name: &str, relative_path: impl AsRef<Path>) -> Result<&TextureData> {
        if self.textures.contains_key(name) {
            bail!("Could not load texture '{}': a texture with this name already exists", name);
        }

        let path = self.root.join(relative_path);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read texture {}", path.display()))?;
        let texture = TextureData::decode(&bytes)
            .with_context(|| format!("Invalid texture {}", path.display()))?;

        self.insert_texture(name, texture)
    }

    pub fn insert_texture(&mut self, name: &str, texture: TextureData) -> Result<&TextureData> {
        match self.textures.entry(name.to_string()) {
            Entry::Occupied(_) => {
                bail!("Could not load texture '{}': a texture with this name already exists", name)
            }
            Entry::Vacant(slot) => Ok(slot.insert(texture)),
        }
    }

    pub fn get_texture(&self, name: &str) -> Option<&TextureData> {
        self.textures.get(name)
    }
}
