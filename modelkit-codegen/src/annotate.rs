//! Accessor documentation for generated base classes.
//!
//! The generator declares each column and relation of a record with a
//! `@property TYPE $NAME` tag. Records expose every property through magic
//! `get*`/`set*` methods, so [`AccessorDocAnnotator`] adds a matching
//! `@method` line per accessor right after the property tags:
//!
//! ```text
//!  * @property string $firstName
//!  * @property Doctrine_Collection $addresses
//!  *
//!  * @method string              getFirstName() Returns the current record's "firstName" value
//!  * @method Doctrine_Collection getAddresses() Returns the current record's "addresses" collection
//!  * @method Employee            setFirstName() Sets the current record's "firstName" value
//!  * @method Employee            setAddresses() Sets the current record's "addresses" collection
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{file::SourceFile, naming::camelize};

static PROPERTY_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@property ([A-Za-z0-9_]+) \$([A-Za-z0-9_]+)").expect("Invalid regex pattern")
});

/// Continuation prefix of a doc comment line.
const COMMENT_LINE: &str = "\n * ";

/// A property declared in a `@property` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub ty: String,
}

/// Properties found in a file and where the last tag ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTags {
    declarations: Vec<PropertyDeclaration>,
    anchor: usize,
}

impl PropertyTags {
    /// Scan `text` for `@property` tags.
    ///
    /// Returns `None` when there are none. A name declared twice keeps its
    /// first position and its last type. The anchor is the byte offset just
    /// past the last tag in the text.
    pub fn extract(text: &str) -> Option<Self> {
        let mut properties: IndexMap<&str, &str> = IndexMap::new();
        let mut anchor = None;

        for caps in PROPERTY_TAG.captures_iter(text) {
            let (Some(tag), Some(ty), Some(name)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };
            properties.insert(name.as_str(), ty.as_str());
            anchor = Some(tag.end());
        }

        let anchor = anchor?;
        let declarations = properties
            .into_iter()
            .map(|(name, ty)| PropertyDeclaration {
                name: name.to_string(),
                ty: ty.to_string(),
            })
            .collect();

        Some(Self {
            declarations,
            anchor,
        })
    }

    pub fn declarations(&self) -> &[PropertyDeclaration] {
        &self.declarations
    }

    /// Byte offset just past the last `@property` tag.
    pub fn anchor(&self) -> usize {
        self.anchor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

impl AccessorKind {
    fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Getter => "get",
            AccessorKind::Setter => "set",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            AccessorKind::Getter => "Returns",
            AccessorKind::Setter => "Sets",
        }
    }
}

/// One `@method` line describing a magic accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDocLine {
    pub kind: AccessorKind,
    /// Declared property type for getters, the record type for setters
    pub return_type: String,
    /// Camel-cased property name, without the get/set prefix
    pub camel_name: String,
    pub property: String,
    pub collection: bool,
}

impl AccessorDocLine {
    /// Render with the type column padded to `type_width` and the accessor
    /// call padded to `name_width + 2`.
    pub fn render(&self, type_width: usize, name_width: usize) -> String {
        let call = format!("{}()", self.camel_name);
        format!(
            "@method {:<type_width$} {}{:<call_width$} {} the current record's \"{}\" {}",
            self.return_type,
            self.kind.prefix(),
            call,
            self.kind.verb(),
            self.property,
            if self.collection { "collection" } else { "value" },
            call_width = name_width + 2,
        )
    }
}

/// The synthesized accessor documentation for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorDocs {
    lines: Vec<AccessorDocLine>,
    type_width: usize,
    name_width: usize,
}

impl AccessorDocs {
    /// Build getter and setter lines for every declaration.
    ///
    /// Getters come first, then setters, each in declaration order.
    pub fn synthesize(
        model: &str,
        declarations: &[PropertyDeclaration],
        collection_type: &str,
    ) -> Self {
        let type_width = declarations
            .iter()
            .map(|d| d.ty.len())
            .chain(std::iter::once(model.len()))
            .max()
            .unwrap_or(0);

        let camel_names: Vec<String> = declarations.iter().map(|d| camelize(&d.name)).collect();
        let name_width = camel_names.iter().map(String::len).max().unwrap_or(0);

        let mut getters = Vec::with_capacity(declarations.len());
        let mut setters = Vec::with_capacity(declarations.len());

        for (decl, camel_name) in declarations.iter().zip(camel_names) {
            let collection = decl.ty == collection_type;
            getters.push(AccessorDocLine {
                kind: AccessorKind::Getter,
                return_type: decl.ty.clone(),
                camel_name: camel_name.clone(),
                property: decl.name.clone(),
                collection,
            });
            setters.push(AccessorDocLine {
                kind: AccessorKind::Setter,
                return_type: model.to_string(),
                camel_name,
                property: decl.name.clone(),
                collection,
            });
        }

        getters.extend(setters);

        Self {
            lines: getters,
            type_width,
            name_width,
        }
    }

    pub fn lines(&self) -> &[AccessorDocLine] {
        &self.lines
    }

    pub fn type_width(&self) -> usize {
        self.type_width
    }

    pub fn name_width(&self) -> usize {
        self.name_width
    }

    /// Number of accessors (getters plus setters).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rendered lines, without comment prefixes.
    pub fn render_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.render(self.type_width, self.name_width))
            .collect()
    }

    /// The text inserted after the last property tag: a blank comment line
    /// followed by one comment line per accessor.
    pub fn render_block(&self) -> String {
        let mut block = String::from(COMMENT_LINE);
        for line in self.render_lines() {
            block.push_str(COMMENT_LINE);
            block.push_str(&line);
        }
        block
    }
}

/// Insert `block` into `text` at byte offset `anchor`.
pub fn inject(text: &str, anchor: usize, block: &str) -> String {
    let mut result = String::with_capacity(text.len() + block.len());
    result.push_str(&text[..anchor]);
    result.push_str(block);
    result.push_str(&text[anchor..]);
    result
}

/// Adds magic accessor documentation to generated base classes.
#[derive(Debug, Clone)]
pub struct AccessorDocAnnotator {
    collection_type: String,
}

impl AccessorDocAnnotator {
    /// Create an annotator treating `collection_type` as the relation
    /// container type.
    pub fn new(collection_type: impl Into<String>) -> Self {
        Self {
            collection_type: collection_type.into(),
        }
    }

    /// Annotate the source of the record `model`.
    ///
    /// Returns the new text and the synthesized docs, or `None` when the
    /// text has no property tags.
    pub fn annotate(&self, model: &str, text: &str) -> Option<(String, AccessorDocs)> {
        let tags = PropertyTags::extract(text)?;
        let docs = AccessorDocs::synthesize(model, tags.declarations(), &self.collection_type);
        let annotated = inject(text, tags.anchor(), &docs.render_block());
        Some((annotated, docs))
    }

    /// Annotate a loaded file in memory. The file is left untouched when it
    /// has no property tags.
    pub fn annotate_file(&self, file: &mut SourceFile, model: &str) -> Option<AccessorDocs> {
        let (annotated, docs) = self.annotate(model, file.content())?;
        file.set_content(annotated);
        Some(docs)
    }
}
