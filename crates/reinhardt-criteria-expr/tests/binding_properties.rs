//! Property tests for literal rendering and binding.

use std::collections::HashSet;

use proptest::prelude::*;
use reinhardt_criteria_expr::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
	prop_oneof![
		any::<bool>().prop_map(Value::from),
		any::<i32>().prop_map(Value::from),
		any::<i64>().prop_map(Value::from),
		any::<u16>().prop_map(Value::from),
		"\\PC*".prop_map(Value::from),
		prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::from),
		Just(Value::Int(None)),
		Just(Value::String(None)),
	]
}

proptest! {
	#[test]
	fn prop_literal_binding_carries_its_value(value in value_strategy()) {
		let literal = LiteralExpr::new(value.clone());
		let compiled = CriteriaQueryCompiler::default().compile_expression(&literal);

		let name = compiled.text().trim_start_matches(':').to_string();
		let prepared = compiled.prepare().unwrap();

		prop_assert_eq!(prepared.value(&name), Some(&value));
		prop_assert_eq!(prepared.bound_values().len(), 1);
	}

	#[test]
	fn prop_literals_receive_distinct_names(values in prop::collection::vec(value_strategy(), 1..20)) {
		let function = FunctionExpr::new("f", None::<ValueType>).args(values.iter().cloned());
		let compiled = CriteriaQueryCompiler::default().compile_expression(&function);

		let names: HashSet<_> = compiled.implicit_bindings().iter().map(|b| b.name()).collect();
		prop_assert_eq!(names.len(), values.len());

		let bound: Vec<_> = compiled.implicit_bindings().iter().map(|b| b.value().clone()).collect();
		prop_assert_eq!(bound, values);
	}

	#[test]
	fn prop_generated_names_skip_explicit_names(start in 0usize..5, count in 1usize..10) {
		let reserved = ParameterExpr::named(format!("param{start}"), ValueType::Int);
		let function = FunctionExpr::new("f", None::<ValueType>)
			.arg(reserved)
			.args((0..count as i32).map(LiteralExpr::new));
		let compiled = CriteriaQueryCompiler::default().compile_expression(&function);

		let reserved_name = format!("param{start}");
		prop_assert!(compiled.implicit_bindings().iter().all(|b| b.name() != reserved_name));
	}
}
