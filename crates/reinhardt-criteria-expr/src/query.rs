//! Criteria queries: roots, selection, restriction and ordering.

use std::collections::HashSet;

use reinhardt_criteria_conf::CriteriaSettings;

use crate::compile::{ParameterRegistry, RenderingContext};
use crate::error::{CriteriaError, Result};
use crate::expr::{Expression, Junction, JunctionType, PathExpr, Renderable};

const DEFAULT_ALIAS_PREFIX: &str = "generatedAlias";

/// An entity in the `from` clause, with its alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
	entity: String,
	alias: String,
}

impl Root {
	pub fn entity(&self) -> &str {
		&self.entity
	}

	pub fn alias(&self) -> &str {
		&self.alias
	}

	/// Path to `attribute` of this root.
	pub fn get(&self, attribute: impl Into<String>) -> PathExpr {
		PathExpr::new(self.alias.clone(), attribute)
	}
}

/// Sort direction of an [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
	#[default]
	Asc,
	Desc,
}

impl SortOrder {
	fn keyword(self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}
}

/// One `order by` item.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
	expression: Expression,
	direction: SortOrder,
}

impl Order {
	pub fn asc<E>(expression: E) -> Self
	where
		E: Into<Expression>,
	{
		Self {
			expression: expression.into(),
			direction: SortOrder::Asc,
		}
	}

	pub fn desc<E>(expression: E) -> Self
	where
		E: Into<Expression>,
	{
		Self {
			expression: expression.into(),
			direction: SortOrder::Desc,
		}
	}

	pub fn expression(&self) -> &Expression {
		&self.expression
	}

	pub fn direction(&self) -> SortOrder {
		self.direction
	}
}

/// A select query built from expression nodes.
///
/// Unlike the expression nodes, a query is mutated in place: roots hand out
/// aliases from a counter owned by the query. Aliases are fixed when a root is
/// added, so the alias prefix comes from the settings the query was created
/// with, not from the compiler that later renders it.
///
/// # Examples
///
/// ```rust
/// use reinhardt_criteria_expr::prelude::*;
///
/// let mut query = CriteriaQuery::new();
/// let order = query.from("Order");
/// query
///     .select(order.get("id"))
///     .where_(order.get("total").gt(100i64))
///     .order_by(Order::desc(order.get("total")));
///
/// assert_eq!(query.roots().len(), 1);
/// assert_eq!(order.alias(), "generatedAlias0");
/// ```
#[derive(Debug, Clone)]
pub struct CriteriaQuery {
	alias_prefix: String,
	alias_count: usize,
	/// Every alias in use, generated or chosen
	aliases: HashSet<String>,
	roots: Vec<Root>,
	selections: Vec<Expression>,
	distinct: bool,
	restriction: Option<Expression>,
	orderings: Vec<Order>,
}

impl Default for CriteriaQuery {
	fn default() -> Self {
		Self::new()
	}
}

impl CriteriaQuery {
	/// Create a query with the default alias prefix.
	pub fn new() -> Self {
		Self::with_alias_prefix(DEFAULT_ALIAS_PREFIX)
	}

	/// Create a query whose generated aliases use `settings.alias_prefix`.
	pub fn with_settings(settings: &CriteriaSettings) -> Self {
		Self::with_alias_prefix(settings.alias_prefix.clone())
	}

	/// Create a query whose generated aliases start with `alias_prefix`.
	pub fn with_alias_prefix(alias_prefix: impl Into<String>) -> Self {
		Self {
			alias_prefix: alias_prefix.into(),
			alias_count: 0,
			aliases: HashSet::new(),
			roots: Vec::new(),
			selections: Vec::new(),
			distinct: false,
			restriction: None,
			orderings: Vec::new(),
		}
	}

	/// Add `entity` to the `from` clause under a generated alias.
	///
	/// Generated aliases skip any alias already taken by an earlier root.
	pub fn from(&mut self, entity: impl Into<String>) -> Root {
		let alias = loop {
			let alias = format!("{}{}", self.alias_prefix, self.alias_count);
			self.alias_count += 1;
			if !self.aliases.contains(&alias) {
				break alias;
			}
		};
		self.from_as(entity, alias)
	}

	/// Add `entity` to the `from` clause under `alias`.
	pub fn from_as(&mut self, entity: impl Into<String>, alias: impl Into<String>) -> Root {
		let root = Root {
			entity: entity.into(),
			alias: alias.into(),
		};
		self.aliases.insert(root.alias.clone());
		self.roots.push(root.clone());
		root
	}

	/// Select a single expression, replacing the current selection.
	pub fn select<E>(&mut self, selection: E) -> &mut Self
	where
		E: Into<Expression>,
	{
		self.selections = vec![selection.into()];
		self
	}

	/// Select several expressions, replacing the current selection.
	pub fn multiselect<I, E>(&mut self, selections: I) -> &mut Self
	where
		I: IntoIterator<Item = E>,
		E: Into<Expression>,
	{
		self.selections = selections.into_iter().map(Into::into).collect();
		self
	}

	pub fn distinct(&mut self, distinct: bool) -> &mut Self {
		self.distinct = distinct;
		self
	}

	/// Set the restriction, replacing any earlier one.
	pub fn where_<P>(&mut self, predicate: P) -> &mut Self
	where
		P: Into<Expression>,
	{
		self.restriction = Some(predicate.into());
		self
	}

	/// Add `predicate` to the restriction with `and`.
	pub fn and_where<P>(&mut self, predicate: P) -> &mut Self
	where
		P: Into<Expression>,
	{
		let predicate = predicate.into();
		self.restriction = Some(match self.restriction.take() {
			None => predicate,
			Some(Expression::Junction(junction))
				if junction.junction_type() == JunctionType::And =>
			{
				junction.add(predicate).into()
			}
			Some(existing) => Junction::all().add(existing).add(predicate).into(),
		});
		self
	}

	pub fn order_by(&mut self, order: Order) -> &mut Self {
		self.orderings.push(order);
		self
	}

	pub fn roots(&self) -> &[Root] {
		&self.roots
	}

	pub fn selections(&self) -> &[Expression] {
		&self.selections
	}

	pub fn is_distinct(&self) -> bool {
		self.distinct
	}

	pub fn restriction(&self) -> Option<&Expression> {
		self.restriction.as_ref()
	}

	pub fn orderings(&self) -> &[Order] {
		&self.orderings
	}

	/// Walk every clause in text order.
	pub(crate) fn register_parameters(&self, registry: &mut ParameterRegistry) {
		for selection in &self.selections {
			selection.register_parameters(registry);
		}
		if let Some(restriction) = &self.restriction {
			restriction.register_parameters(registry);
		}
		for order in &self.orderings {
			order.expression.register_parameters(registry);
		}
	}

	pub(crate) fn render(&self, context: &mut RenderingContext) -> Result<String> {
		if self.roots.is_empty() {
			return Err(CriteriaError::MissingRoot);
		}

		let selection = match (self.selections.as_slice(), self.roots.as_slice()) {
			([], [root]) => root.alias.clone(),
			([], roots) => return Err(CriteriaError::AmbiguousSelection(roots.len())),
			(selections, _) => selections
				.iter()
				.map(|selection| selection.render_projection(context))
				.collect::<Vec<_>>()
				.join(", "),
		};

		let mut text = String::from("select ");
		if self.distinct {
			text.push_str("distinct ");
		}
		text.push_str(&selection);

		let roots: Vec<String> = self
			.roots
			.iter()
			.map(|root| format!("{} as {}", root.entity, root.alias))
			.collect();
		text.push_str(" from ");
		text.push_str(&roots.join(", "));

		if let Some(restriction) = &self.restriction {
			text.push_str(" where ");
			text.push_str(&restriction.render(context));
		}

		if !self.orderings.is_empty() {
			let orderings: Vec<String> = self
				.orderings
				.iter()
				.map(|order| {
					format!(
						"{} {}",
						order.expression.render(context),
						order.direction.keyword()
					)
				})
				.collect();
			text.push_str(" order by ");
			text.push_str(&orderings.join(", "));
		}

		Ok(text)
	}
}
