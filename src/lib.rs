//! # Kiji
//!
//! Renders AI-generated SEO articles into two audience-specific artifacts:
//! an interactive, navigable preview tree and a self-contained, portable
//! HTML document. The article itself comes from an upstream generator (an
//! LLM call or a static fallback template — outside this crate); kiji only
//! consumes the finished [`types::Article`] value.
//!
//! # Architecture: One Skeleton, Two Serializers
//!
//! ```text
//! Article ──▶ blocks (parse)──▶ outline (anchors + TOC) ──┬─▶ preview tree
//!                                     inline (emphasis) ──┴─▶ standalone HTML
//! ```
//!
//! The two outputs must present identical structure — the same heading
//! hierarchy, the same table of contents, the same anchor ids — even though
//! they serialize independently. That guarantee is structural, not
//! disciplinary:
//!
//! - **Parsing happens once.** [`blocks`] turns a section body into typed
//!   blocks; neither serializer re-scans raw text.
//! - **Anchors are assigned once.** [`outline`] pairs every heading with its
//!   id and builds the TOC; serializers read ids off the outline and never
//!   mint their own.
//! - **Emphasis is transformed once.** [`inline`] is the single
//!   implementation of the `**bold**`/`*italic*` syntax, called by both
//!   consumers. Two hand-maintained regexes drifting apart is the classic
//!   defect in this kind of pipeline, and it is not expressible here.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Article content model, validation, JSON loading |
//! | [`blocks`] | Section body → ordered block sequence (sub-headings, paragraphs) |
//! | [`inline`] | Shared inline emphasis parser and renderer |
//! | [`outline`] | Anchor assignment and table-of-contents construction |
//! | [`preview`] | Typed preview render tree + its display markup |
//! | [`export`] | Standalone HTML document serialization |
//! | [`output`] | CLI display of outlines and export summaries |
//!
//! # Design Decisions
//!
//! ## A Tiny Fixed Markup, Not Markdown
//!
//! Section bodies use exactly three constructs: `### ` sub-headings, blank
//! line paragraph breaks, and `**`/`*` emphasis. This is the language the
//! upstream generator is prompted to emit — nothing more is ever present, so
//! a Markdown engine would mostly be surface area for surprises (lists,
//! links, and HTML passthrough appearing because a model felt like it). The
//! parser is a single left-to-right scan with one piece of state.
//!
//! ## Positional Anchors
//!
//! Anchor ids are a pure function of (section position, sub-heading ordinal)
//! — `section-3`, `section-3-h3-2` — never of heading text. Generated
//! articles routinely repeat heading text (two sections titled 「まとめ」),
//! and slug-based schemes either collide or need dedup state. Numbering is
//! 1-based in every target.
//!
//! ## Maud Over Template Engines
//!
//! Both serializers use [Maud](https://maud.lambda.xyz/) compile-time
//! templates: malformed HTML is a build error, interpolation is auto-escaped
//! (the article text is model output and untrusted), and there is no
//! template directory to ship.
//!
//! ## Pure Core
//!
//! Everything from parsing to serialization is a deterministic function of
//! the article value: no I/O, no clock, no ambient state. Rendering the same
//! article twice yields byte-identical output, and concurrent renders share
//! nothing. The only fallible edge is loading article JSON from disk.

pub mod blocks;
pub mod export;
pub mod inline;
pub mod outline;
pub mod output;
pub mod preview;
pub mod types;
