//! Mounted slide sequence, with clone padding in wraparound mode.

/// Items that carry a stable identity, shared by every mounted copy
pub trait Identified {
    type Id: Clone + Eq + std::hash::Hash;

    fn id(&self) -> Self::Id;
}

/// One mounted slot of the track
#[derive(Debug, Clone, PartialEq)]
pub struct Slide<T> {
    pub item: T,
    /// Position of the real item this slot shows
    pub source: usize,
    pub is_clone: bool,
}

/// Ordered slots: `[tail clones] real items [head clones]`
#[derive(Debug, Clone)]
pub struct Track<T> {
    slides: Vec<Slide<T>>,
    real_len: usize,
    padding: usize,
}

impl<T: Clone> Track<T> {
    /// Mount `items`, padding each end with `padding` clones.
    ///
    /// `padding` is 0 when wraparound is not in effect.
    pub fn build(items: &[T], padding: usize) -> Self {
        let real_len = items.len();
        let padding = padding.min(real_len);
        let mut slides = Vec::with_capacity(real_len + padding * 2);

        for (source, item) in items.iter().enumerate().skip(real_len - padding) {
            slides.push(Slide {
                item: item.clone(),
                source,
                is_clone: true,
            });
        }
        for (source, item) in items.iter().enumerate() {
            slides.push(Slide {
                item: item.clone(),
                source,
                is_clone: false,
            });
        }
        for (source, item) in items.iter().enumerate().take(padding) {
            slides.push(Slide {
                item: item.clone(),
                source,
                is_clone: true,
            });
        }

        Self {
            slides,
            real_len,
            padding,
        }
    }
}

impl<T> Track<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of real (non-clone) items
    #[inline]
    pub fn real_len(&self) -> usize {
        self.real_len
    }

    /// Clone slots on each end
    #[inline]
    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn slot(&self, physical: usize) -> Option<&Slide<T>> {
        self.slides.get(physical)
    }

    /// Real slot behind `physical`; clones forward to the item they copy
    pub fn resolve(&self, physical: usize) -> Option<&Slide<T>> {
        let slide = self.slides.get(physical)?;
        if slide.is_clone {
            self.slides.get(self.padding + slide.source)
        } else {
            Some(slide)
        }
    }

    /// Slots visible with `physical` at the left edge
    pub fn window(&self, physical: usize, slides_to_show: usize) -> &[Slide<T>] {
        let start = physical.min(self.slides.len());
        let end = (physical + slides_to_show).min(self.slides.len());
        &self.slides[start..end]
    }
}
