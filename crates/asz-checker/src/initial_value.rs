//! Constant initializer coercion.
//!
//! The constant folder hands the checker the value of a `const`, a member
//! variable or a parameter default. When its type does not match the
//! declared type it is converted the way the runtime would, the conversion is
//! reported, and the converted value is returned for code generation.
//!
//! | value \ declared | `*`, Object, void | Array, XML, Function, Class | String | Boolean | Number | int, uint |
//! |---|---|---|---|---|---|---|
//! | number | kept | `null` | string | boolean | kept | range and integrality checked |
//! | string, boolean | kept | `null` | string | boolean | number | converted |
//! | `null` | kept | kept | kept | `false` | `0` | `0` |
//! | `undefined` | kept | kept | kept | kept | kept | kept |

use crate::state::CheckerState;
use asz_ast::NodeIndex;
use asz_binder::{Binding, BuiltinType, DefId};
use asz_common::PooledValue;
use asz_common::diagnostics::diagnostic_codes;
use asz_common::ecma::{number_to_string, to_int32, to_integer, to_uint32};
use asz_common::limits::{INT_MAX, INT_MIN, UINT_MAX, UINT_MIN};
use tracing::trace;

/// Integral rendering of an out-of-range value, saturating like a cast to a
/// 64-bit integer.
#[allow(clippy::cast_possible_truncation)]
fn integral_display(value: f64) -> String {
    (value as i64).to_string()
}

impl<'a> CheckerState<'a> {
    /// Initializer of the variable or parameter `node`, whose type
    /// annotation resolved to `type_binding`.
    pub fn check_initial_value(
        &mut self,
        node: NodeIndex,
        type_binding: &Binding,
        value: &PooledValue,
    ) -> PooledValue {
        let arena = self.ctx.arena;
        let site = arena
            .get_variable(node)
            .map(|v| v.initializer)
            .or_else(|| arena.get_parameter(node).map(|p| p.default_value))
            .filter(|n| n.is_some())
            .unwrap_or(node);
        self.coerce_initial_value(site, type_binding.definition, value)
    }

    /// Convert `value` toward `desired`, reporting at `site` when the value
    /// changes.
    #[tracing::instrument(level = "trace", skip_all, fields(site = ?site))]
    pub fn coerce_initial_value(
        &mut self,
        site: NodeIndex,
        desired: Option<DefId>,
        value: &PooledValue,
    ) -> PooledValue {
        let ctx = self.ctx;
        let Some(desired_def) = desired else {
            return value.clone();
        };
        let value_type = ctx.type_of_pooled_value(value);
        let value_builtin = ctx.project.builtins().builtin_of(value_type);
        let value_is_null = value_builtin == Some(BuiltinType::Null);
        if desired_def == value_type {
            return value.clone();
        }
        // `null` is an instance of every class, but numeric and `Boolean`
        // slots cannot hold it.
        if value_is_null {
            if !ctx.is_numeric_type_or_boolean(desired) {
                return value.clone();
            }
        } else if ctx.is_instance_of(value_type, desired_def) {
            return value.clone();
        }

        let value_type_name = ctx.def(value_type).name.clone();
        let desired_name = ctx.def(desired_def).name.clone();

        match ctx.builtin_of(desired) {
            Some(BuiltinType::Object | BuiltinType::AnyType) => value.clone(),
            _ if value_builtin == Some(BuiltinType::Void) => value.clone(),
            Some(BuiltinType::Array | BuiltinType::Xml | BuiltinType::Function | BuiltinType::Class) => {
                if value_is_null {
                    return value.clone();
                }
                self.report_incompatible_initializer(site, &value_type_name, &desired_name, "null");
                PooledValue::Null
            }
            Some(BuiltinType::String) => {
                if value_is_null {
                    return value.clone();
                }
                let string = value.to_string();
                self.report_incompatible_initializer(
                    site,
                    &value_type_name,
                    &desired_name,
                    &format!("\"{string}\""),
                );
                PooledValue::Utf8(string)
            }
            Some(BuiltinType::Boolean) => {
                let boolean = value.to_boolean();
                self.report_incompatible_initializer(
                    site,
                    &value_type_name,
                    &desired_name,
                    if boolean { "true" } else { "false" },
                );
                PooledValue::from_bool(boolean)
            }
            Some(BuiltinType::Number) => {
                if value.is_numeric() {
                    return value.clone();
                }
                let number = Self::numeric_value(value);
                self.report_incompatible_initializer(
                    site,
                    &value_type_name,
                    &desired_name,
                    &number_to_string(number),
                );
                PooledValue::Double(number)
            }
            Some(BuiltinType::UInt) => self.coerce_to_uint(site, &desired_name, &value_type_name, value),
            Some(BuiltinType::Int) => self.coerce_to_int(site, &desired_name, &value_type_name, value),
            _ => {
                self.report_incompatible_initializer(site, &value_type_name, &desired_name, "null");
                PooledValue::Null
            }
        }
    }

    /// Numeric value of a non-numeric constant; values with no numeric
    /// reading become zero.
    fn numeric_value(value: &PooledValue) -> f64 {
        match value {
            PooledValue::Namespace(_) => 0.0,
            other => other.to_number(),
        }
    }

    fn coerce_to_int(
        &mut self,
        site: NodeIndex,
        desired_name: &str,
        value_type_name: &str,
        value: &PooledValue,
    ) -> PooledValue {
        match *value {
            PooledValue::Int(_) => value.clone(),
            PooledValue::UInt(v) => {
                if i32::try_from(v).is_ok() {
                    value.clone()
                } else {
                    self.report_int_out_of_range(site, desired_name, f64::from(v))
                }
            }
            PooledValue::Double(v) => {
                let rounded = to_integer(v);
                let int = to_int32(v);
                if rounded != v {
                    trace!(v, int, "fractional int initializer");
                    self.error_at_node_msg(
                        site,
                        diagnostic_codes::INITIALIZER_VALUE_NOT_AN_INTEGER,
                        &[desired_name, &number_to_string(v), &int.to_string()],
                    );
                    PooledValue::Int(int)
                } else if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
                    self.report_int_out_of_range(site, desired_name, rounded)
                } else {
                    PooledValue::Int(int)
                }
            }
            _ => {
                let int = to_int32(Self::numeric_value(value));
                self.report_incompatible_initializer(site, value_type_name, desired_name, &int.to_string());
                PooledValue::Int(int)
            }
        }
    }

    fn coerce_to_uint(
        &mut self,
        site: NodeIndex,
        desired_name: &str,
        value_type_name: &str,
        value: &PooledValue,
    ) -> PooledValue {
        match *value {
            PooledValue::UInt(_) => value.clone(),
            PooledValue::Int(v) => {
                if v < 0 {
                    self.report_uint_out_of_range(site, desired_name, f64::from(v))
                } else {
                    value.clone()
                }
            }
            PooledValue::Double(v) => {
                let int = to_integer(v);
                let uint = to_uint32(int);
                if v != int {
                    trace!(v, uint, "fractional uint initializer");
                    self.error_at_node_msg(
                        site,
                        diagnostic_codes::INITIALIZER_VALUE_NOT_AN_INTEGER,
                        &[desired_name, &number_to_string(v), &uint.to_string()],
                    );
                    PooledValue::UInt(uint)
                } else if int < 0.0 || int > f64::from(u32::MAX) {
                    self.report_uint_out_of_range(site, desired_name, int)
                } else {
                    PooledValue::UInt(uint)
                }
            }
            _ => {
                let uint = to_uint32(Self::numeric_value(value));
                self.report_incompatible_initializer(site, value_type_name, desired_name, &uint.to_string());
                PooledValue::UInt(uint)
            }
        }
    }

    fn report_incompatible_initializer(&mut self, site: NodeIndex, value_type: &str, desired: &str, result: &str) {
        self.error_at_node_msg(
            site,
            diagnostic_codes::INCOMPATIBLE_INITIALIZER_TYPE,
            &[value_type, desired, result],
        );
    }

    fn report_int_out_of_range(&mut self, site: NodeIndex, desired_name: &str, value: f64) -> PooledValue {
        let int = to_int32(value);
        self.error_at_node_msg(
            site,
            diagnostic_codes::INITIALIZER_VALUE_OUT_OF_RANGE,
            &[
                desired_name,
                &integral_display(value),
                &INT_MIN.to_string(),
                &INT_MAX.to_string(),
                &int.to_string(),
            ],
        );
        PooledValue::Int(int)
    }

    fn report_uint_out_of_range(&mut self, site: NodeIndex, desired_name: &str, value: f64) -> PooledValue {
        let uint = to_uint32(value);
        self.error_at_node_msg(
            site,
            diagnostic_codes::INITIALIZER_VALUE_OUT_OF_RANGE,
            &[
                desired_name,
                &integral_display(value),
                &UINT_MIN.to_string(),
                &UINT_MAX.to_string(),
                &uint.to_string(),
            ],
        );
        PooledValue::UInt(uint)
    }
}
