use geoapi::util::{GenericName, InternationalString, LocalName, NameKind, NameSpace, ScopedName};

use crate::assertions::{assert_equals, assert_false, assert_not_same, assert_same, assert_true};
use crate::error::ValidationResult;
use crate::validator::ValidatorBase;

/// Validates international strings, names and name spaces.
#[derive(Debug)]
pub struct NameValidator {
    base: ValidatorBase,
}

impl Default for NameValidator {
    fn default() -> Self {
        Self {
            base: ValidatorBase::new("geoapi::util"),
        }
    }
}

impl NameValidator {
    /// Obligation checks and policy flags.
    pub fn base(&self) -> &ValidatorBase {
        &self.base
    }

    /// Validates a localizable string.
    pub fn validate_international_string(
        &self,
        object: Option<&dyn InternationalString>,
    ) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let text = object.to_string();
        assert_equals(
            "InternationalString: Display should be stable.",
            &text,
            &object.to_string(),
        )?;
        assert_equals(
            "InternationalString: character count is inconsistent with Display.",
            text.chars().count(),
            object.char_count(),
        )?;
        self.base.mandatory(
            "InternationalString: localized(None) should not return None.",
            &object.localized(None),
        )
    }

    /// Validates a name space and the generic properties of its name.
    pub fn validate_name_space(&self, object: Option<&dyn NameSpace>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let name = object.name();
        self.base.mandatory("NameSpace: must have a name.", &name)?;
        if let Some(name) = name {
            let scope = name.scope();
            self.base.mandatory("NameSpace: must have a scope.", &scope)?;
            if let Some(scope) = scope {
                assert_true("NameSpace: scope must be global.", scope.is_global())?;
            }
            assert_equals(
                "NameSpace: the name must be fully qualified.",
                name.to_string(),
                name.to_fully_qualified_name(),
            )?;
        }

        if object.is_global() {
            assert_true(
                "NameSpace: global namespace must have a local name.",
                matches!(name.map(|name| name.kind()), Some(NameKind::Local(_))),
            )?;
        }

        match name {
            Some(name) => self.validate_generic_name(name, &name.parsed_names()),
            None => Ok(()),
        }
    }

    /// Validates a name according to its kind.
    pub fn dispatch(&self, object: Option<&dyn GenericName>) -> ValidationResult {
        match object.map(|object| object.kind()) {
            Some(NameKind::Local(name)) => self.validate_local_name(Some(name)),
            Some(NameKind::Scoped(name)) => self.validate_scoped_name(Some(name)),
            None => Ok(()),
        }
    }

    fn validate_generic_name<T: GenericName + ?Sized>(
        &self,
        object: &T,
        parsed_names: &[&dyn LocalName],
    ) -> ValidationResult {
        let (Some(head), Some(tip)) = (parsed_names.first(), parsed_names.last()) else {
            return assert_false(
                "GenericName: parsed_names() shall not return an empty list.",
                true,
            );
        };

        assert_equals(
            "GenericName: parsed_names() list size should be equal to depth().",
            parsed_names.len(),
            object.depth(),
        )?;
        assert_same(
            "GenericName: head() should be the first element in parsed_names() list.",
            *head,
            object.head(),
        )?;
        assert_same(
            "GenericName: tip() should be the last element in parsed_names() list.",
            *tip,
            object.tip(),
        )
    }

    /// Validates a name made of a single element.
    pub fn validate_local_name(&self, object: Option<&dyn LocalName>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        self.validate_name_space(object.scope())?;
        let parsed_names = object.parsed_names();
        self.validate_generic_name(object, &parsed_names)?;
        assert_equals(
            "LocalName: should have exactly one parsed name.",
            1,
            parsed_names.len(),
        )?;
        assert_same(
            "LocalName: the parsed name element should be the enclosing local name.",
            object,
            parsed_names[0],
        )
    }

    /// Validates a name made of several elements, each of them being validated as a local name.
    pub fn validate_scoped_name(&self, object: Option<&dyn ScopedName>) -> ValidationResult {
        let Some(object) = object else {
            return Ok(());
        };

        let parsed_names = object.parsed_names();
        self.validate_generic_name(object, &parsed_names)?;
        let scope = object.scope();
        self.validate_name_space(scope)?;
        if let Some(scope) = scope {
            match object.head().scope() {
                Some(head_scope) => assert_same(
                    "ScopedName: head.scope should be same than scope.",
                    scope,
                    head_scope,
                )?,
                None => assert_true("ScopedName: head.scope should be same than scope.", false)?,
            }
        }

        // Only the first name may be global.
        let mut global = scope.is_some_and(|scope| scope.is_global());
        for name in parsed_names {
            assert_not_same(
                "ScopedName: the enclosing scoped name can not be in any parsed name.",
                object,
                name,
            )?;
            assert_equals(
                "ScopedName: inconsistent value of is_global().",
                global,
                name.scope().is_some_and(|scope| scope.is_global()),
            )?;
            global = false;
            self.validate_local_name(Some(name))?;
        }

        Ok(())
    }
}
