//! Build-time loader turning the declarative vocabulary into the two
//! immutable registries.

use relmeta_props::{
    GuessError, PropertiesBuilder, PropertiesContainer, QualitiesBuilder, QualitiesContainer,
};
use tracing::debug;

use crate::vocabulary;

/// Walk the vocabulary and build both registries.
///
/// Plain categories are registered first, then identity tags, then derived
/// categories and suffix compounds — bases are always plain categories, so
/// composition never observes a partially-registered base. Any invalid
/// pattern source aborts the build with the offending source identified.
pub fn build_registries() -> Result<(PropertiesContainer, QualitiesContainer), GuessError> {
    let mut props = PropertiesBuilder::new();

    for cat in vocabulary::CATEGORIES {
        for def in cat.properties {
            props.register_property(
                cat.category,
                def.patterns,
                def.canonical_form,
                def.confidence,
                def.validator,
            )?;
        }
    }

    for def in vocabulary::CANONICALS {
        props.register_canonical(def.category, def.forms, def.validator)?;
    }

    for def in vocabulary::DERIVED {
        for entry in def.entries {
            props.register_derived(
                def.category,
                def.base_category,
                entry.base_canonical,
                entry.canonical_form,
                entry.tokens,
            )?;
        }
    }

    for def in vocabulary::SUFFIXES {
        props.register_derived_suffix(
            def.category,
            def.base_category,
            def.suffix,
            def.canonical_form,
        )?;
    }

    let mut qualities = QualitiesBuilder::new();
    for def in vocabulary::QUALITIES {
        for (form, score) in def.scores {
            qualities.register_quality(def.category, form, *score);
        }
    }

    debug!("registries built from built-in vocabulary");
    Ok((props.build(), qualities.build()))
}
