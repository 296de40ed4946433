//! Lowering a parsed manifest into `blobgen_ir` structs.

use std::{collections::HashMap, sync::Arc};

use blobgen_ir::{Field, Primitive, Struct, TypeRef};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{FieldDef, Manifest, Result};

/// Resolves field types against `[structs]` and chains `extends`.
pub(crate) struct Lowering<'a> {
    manifest: &'a Manifest,
    resolved: HashMap<&'a str, Arc<Struct>>,
    /// Structs currently being resolved, outermost first.
    in_progress: Vec<&'a str>,
}

impl<'a> Lowering<'a> {
    pub(crate) fn new(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
        }
    }

    pub(crate) fn settings(mut self) -> Result<Vec<Struct>> {
        let manifest = self.manifest;
        let mut lowered: IndexMap<&str, Struct> = IndexMap::new();

        for entry in &manifest.settings {
            let fields = self.fields(&entry.name, &entry.fields)?;
            let s = match &entry.extends {
                Some(extends) => {
                    let prior = lowered.get(extends.as_str()).ok_or_else(|| {
                        manifest.source().unknown_extends_error(&entry.name, extends)
                    })?;
                    Struct::extend(prior, entry.name.as_str(), fields)
                }
                None => Struct::new(entry.name.as_str(), fields),
            };
            trace!(
                struct_name = s.name(),
                fields = s.fields().len(),
                "lowered settings entry"
            );
            lowered.insert(entry.name.as_str(), s);
        }

        debug!(
            settings = lowered.len(),
            structs = self.resolved.len(),
            "lowered manifest"
        );
        Ok(lowered.into_values().collect())
    }

    fn fields(&mut self, owner: &str, defs: &'a [FieldDef]) -> Result<Vec<Field>> {
        defs.iter()
            .map(|def| -> Result<Field> {
                Ok(Field::new(def.name.as_str(), self.resolve(owner, def)?))
            })
            .collect()
    }

    fn resolve(&mut self, owner: &str, def: &'a FieldDef) -> Result<TypeRef> {
        let manifest = self.manifest;
        if let Some(primitive) = Primitive::from_schema_name(&def.ty) {
            return Ok(primitive.into());
        }

        let name = def.ty.trim();
        let Some((key, _)) = manifest.structs.get_key_value(name) else {
            return Err(manifest.source().unknown_type_error(owner, &def.name, &def.ty));
        };
        self.named_struct(key.as_str()).map(TypeRef::from)
    }

    fn named_struct(&mut self, name: &'a str) -> Result<Arc<Struct>> {
        let manifest = self.manifest;
        if let Some(done) = self.resolved.get(name) {
            return Ok(Arc::clone(done));
        }

        if let Some(start) = self.in_progress.iter().position(|n| *n == name) {
            let mut cycle = self.in_progress[start..].to_vec();
            cycle.push(name);
            return Err(self.manifest.source().recursive_struct_error(&cycle));
        }

        let Some(def) = manifest.structs.get(name) else {
            return Err(manifest
                .source()
                .validation_error(format!("struct '{}' is not declared", name)));
        };

        self.in_progress.push(name);
        let fields = self.fields(name, &def.fields)?;
        self.in_progress.pop();

        let resolved = Arc::new(Struct::new(name, fields));
        self.resolved.insert(name, Arc::clone(&resolved));
        Ok(resolved)
    }
}
