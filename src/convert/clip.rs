//! `<clip-path>` → `clip-path="url(#clipPathN)"` + hoisted `<defs>`.
//!
//! Drawables express clipping as a sibling element that clips everything in
//! the enclosing group. SVG wants a referenced definition instead, so clip
//! regions are collected during the walk and written out once, in a `<defs>`
//! block at the end of the document.

use super::{ConvertError, required_attr};
use crate::svg::{SvgElement, SvgTag};
use crate::vector::{SourceElement, collapse_whitespace};

/// Ordered, append-only list of clip path data.
///
/// Entry `i` is always defined as `clipPath{i}`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClipRegistry {
    entries: Vec<String>,
}

impl ClipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Store `data` and return its index.
    pub fn register(&mut self, data: String) -> usize {
        let index = self.entries.len();
        self.entries.push(data);
        index
    }

    /// Register `clip` and point `target` at it.
    ///
    /// A later clip on the same target replaces the earlier reference.
    pub fn collect(
        &mut self,
        clip: &SourceElement<'_, '_>,
        target: &mut SvgElement,
    ) -> Result<usize, ConvertError> {
        let data = collapse_whitespace(required_attr(clip, "pathData")?);
        let index = self.register(data);
        target.set("clip-path", format!("url(#{})", clip_id(index)));
        Ok(index)
    }

    /// Append the `<defs>` block to `root`. Does nothing when empty.
    pub fn flush_into(self, root: &mut SvgElement) {
        if self.entries.is_empty() {
            return;
        }

        let defs = root.push(SvgElement::new(SvgTag::Defs));
        for (index, data) in self.entries.into_iter().enumerate() {
            defs.push(SvgElement::new(SvgTag::ClipPath).with("id", clip_id(index)))
                .push(SvgElement::new(SvgTag::Path).with("d", data));
        }
    }
}

pub fn clip_id(index: usize) -> String {
    format!("clipPath{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::tests::{SIZE_24, with_root};

    #[test]
    fn test_register_indices_start_at_zero() {
        let mut clips = ClipRegistry::new();
        assert_eq!(clips.len(), 0);
        assert_eq!(clips.register("M0 0".into()), 0);
        assert_eq!(clips.register("M1 1".into()), 1);
        assert_eq!(clips.len(), 2);
    }

    #[test]
    fn test_collect_sets_reference() {
        with_root(
            SIZE_24,
            r#"<clip-path android:pathData="M0,0  h12
                                             v12 z"/>"#,
            |vector| {
                let clip = vector.children().next().unwrap();
                let mut clips = ClipRegistry::new();
                let mut g = SvgElement::new(SvgTag::Group);

                assert_eq!(clips.collect(&clip, &mut g).unwrap(), 0);
                assert_eq!(g.get("clip-path"), Some("url(#clipPath0)"));
                assert_eq!(clips.entries, vec!["M0,0 h12 v12 z".to_string()]);
            },
        );
    }

    #[test]
    fn test_collect_without_data_fails() {
        with_root(SIZE_24, r#"<clip-path android:name="mask"/>"#, |vector| {
            let clip = vector.children().next().unwrap();
            let mut clips = ClipRegistry::new();
            let mut g = SvgElement::new(SvgTag::Group);

            let err = clips.collect(&clip, &mut g).unwrap_err();
            assert_eq!(
                err.to_string(),
                "<clip-path> is missing required attribute `pathData`"
            );
            assert_eq!(clips.len(), 0);
            assert_eq!(g.get("clip-path"), None);
        });
    }

    #[test]
    fn test_flush_builds_defs_in_order() {
        let mut clips = ClipRegistry::new();
        clips.register("M0 0h1".into());
        clips.register("M2 2h1".into());

        let mut root = SvgElement::new(SvgTag::Svg);
        clips.flush_into(&mut root);

        let defs = &root.children[0];
        assert_eq!(defs.tag, SvgTag::Defs);
        assert_eq!(defs.children.len(), 2);
        for (i, clip) in defs.children.iter().enumerate() {
            assert_eq!(clip.tag, SvgTag::ClipPath);
            assert_eq!(clip.get("id"), Some(clip_id(i).as_str()));
            assert_eq!(clip.children[0].tag, SvgTag::Path);
        }
        assert_eq!(defs.children[1].children[0].get("d"), Some("M2 2h1"));
    }

    #[test]
    fn test_flush_empty_adds_nothing() {
        let mut root = SvgElement::new(SvgTag::Svg);
        ClipRegistry::new().flush_into(&mut root);
        assert!(root.children.is_empty());
    }
}
