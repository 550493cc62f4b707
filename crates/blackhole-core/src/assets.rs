//! Startup precondition: the shader template plus five named textures.
//!
//! The gate is generic over the texture handle so the same bookkeeping works
//! for decoded images on the host and GPU textures in a front-end.

use crate::error::AssetError;
use crate::shader::FALLBACK_FRAGMENT_WGSL;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureFilter {
    Linear,
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Galaxy,
    Spectra,
    Planet,
    Stars,
    AccretionDisk,
}

impl TextureKind {
    /// Binding order used by the renderer.
    pub const ALL: [TextureKind; 5] = [
        TextureKind::Galaxy,
        TextureKind::Spectra,
        TextureKind::Planet,
        TextureKind::Stars,
        TextureKind::AccretionDisk,
    ];

    pub fn index(self) -> usize {
        match self {
            TextureKind::Galaxy => 0,
            TextureKind::Spectra => 1,
            TextureKind::Planet => 2,
            TextureKind::Stars => 3,
            TextureKind::AccretionDisk => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TextureKind::Galaxy => "galaxy",
            TextureKind::Spectra => "spectra",
            TextureKind::Planet => "planet",
            TextureKind::Stars => "stars",
            TextureKind::AccretionDisk => "accretion_disk",
        }
    }

    /// File name relative to the asset root.
    pub fn file_name(self) -> &'static str {
        match self {
            TextureKind::Galaxy => "milkyway.jpg",
            TextureKind::Spectra => "spectra.png",
            TextureKind::Planet => "beach-ball.png",
            TextureKind::Stars => "stars.png",
            TextureKind::AccretionDisk => "accretion-disk.png",
        }
    }

    pub fn filter(self) -> TextureFilter {
        match self {
            TextureKind::Galaxy => TextureFilter::Nearest,
            _ => TextureFilter::Linear,
        }
    }
}

/// One handle per [`TextureKind`], all present.
#[derive(Clone, Debug)]
pub struct TextureSet<T> {
    textures: [T; 5],
}

impl<T> TextureSet<T> {
    pub fn get(&self, kind: TextureKind) -> &T {
        &self.textures[kind.index()]
    }

    /// Handles in binding order, paired with their kind.
    pub fn iter(&self) -> impl Iterator<Item = (TextureKind, &T)> {
        TextureKind::ALL.into_iter().zip(self.textures.iter())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> TextureSet<U> {
        TextureSet {
            textures: self.textures.map(f),
        }
    }

    pub fn map_with_kind<U>(self, mut f: impl FnMut(TextureKind, T) -> U) -> TextureSet<U> {
        let [galaxy, spectra, planet, stars, disk] = self.textures;
        TextureSet {
            textures: [
                f(TextureKind::Galaxy, galaxy),
                f(TextureKind::Spectra, spectra),
                f(TextureKind::Planet, planet),
                f(TextureKind::Stars, stars),
                f(TextureKind::AccretionDisk, disk),
            ],
        }
    }

    pub fn as_ref(&self) -> TextureSet<&T> {
        TextureSet {
            textures: self.textures.each_ref(),
        }
    }
}

/// Collects assets as they arrive and reports when startup may proceed.
#[derive(Debug)]
pub struct AssetGate<T> {
    textures: [Option<T>; 5],
    template: Option<String>,
}

impl<T> Default for AssetGate<T> {
    fn default() -> Self {
        Self {
            textures: [None, None, None, None, None],
            template: None,
        }
    }
}

impl<T> AssetGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide_texture(&mut self, kind: TextureKind, texture: T) {
        self.textures[kind.index()] = Some(texture);
    }

    /// Store a load result, substituting `placeholder()` when it failed.
    pub fn provide_texture_or(
        &mut self,
        kind: TextureKind,
        loaded: Result<T, AssetError>,
        placeholder: impl FnOnce() -> T,
    ) {
        let texture = loaded.unwrap_or_else(|err| {
            log::warn!("[assets] {err}; using placeholder for {}", kind.name());
            placeholder()
        });
        self.provide_texture(kind, texture);
    }

    /// Store the template, or the fallback program when loading failed.
    pub fn provide_template(&mut self, loaded: Result<String, AssetError>) {
        let template = loaded.unwrap_or_else(|err| {
            log::warn!("[assets] {err}; falling back to the minimal program");
            FALLBACK_FRAGMENT_WGSL.to_string()
        });
        self.template = Some(template);
    }

    /// Names of the slots still empty.
    pub fn missing(&self) -> SmallVec<[&'static str; 6]> {
        let mut missing: SmallVec<[&'static str; 6]> = TextureKind::ALL
            .iter()
            .filter(|kind| self.textures[kind.index()].is_none())
            .map(|kind| kind.name())
            .collect();
        if self.template.is_none() {
            missing.push("template");
        }
        missing
    }

    pub fn is_ready(&self) -> bool {
        self.template.is_some() && self.textures.iter().all(Option::is_some)
    }

    /// Hand over the textures and template once everything has arrived.
    pub fn into_parts(self) -> Result<(TextureSet<T>, String), AssetError> {
        let missing = self.missing();
        let [a, b, c, d, e] = self.textures;
        match (a, b, c, d, e, self.template) {
            (Some(a), Some(b), Some(c), Some(d), Some(e), Some(template)) => Ok((
                TextureSet {
                    textures: [a, b, c, d, e],
                },
                template,
            )),
            _ => Err(AssetError::Incomplete(missing.join(", "))),
        }
    }
}
