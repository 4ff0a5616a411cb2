//! # Fluent Search
//!
//! Accumulates predicates and result options, then runs the search through
//! the client it is bound to.
//!
//! ```ignore
//! let verified = client
//!     .select()
//!     .asset_type("Table")
//!     .where_(fields::CERTIFICATE_STATUS.eq("VERIFIED"))
//!     .include_on_results("ownerUsers")
//!     .stream();
//! ```

use crate::client::AtlanClient;
use crate::error::AtlanResult;
use crate::model::asset::Asset;
use crate::model::enums::EntityStatus;
use crate::search::fields;
use crate::search::pager::AssetPager;
use crate::search::query::{BoolQuery, Query};
use crate::search::request::{Aggregation, Dsl, IndexSearchRequest, SortItem, SortOrder};
use crate::search::response::IndexSearchResponse;
use indexmap::IndexMap;

/// Search builder bound to a client.
#[derive(Debug, Clone)]
pub struct FluentSearch<'c> {
    client: &'c AtlanClient,
    wheres: Vec<Query>,
    where_nots: Vec<Query>,
    where_somes: Vec<Query>,
    min_somes: u32,
    page_size: u32,
    attributes: Vec<String>,
    relation_attributes: Vec<String>,
    sorts: Vec<SortItem>,
    aggregations: IndexMap<String, Aggregation>,
}

impl<'c> FluentSearch<'c> {
    /// Starts an unrestricted search; `AtlanClient::select` also limits it to
    /// active assets.
    pub fn new(client: &'c AtlanClient) -> Self {
        Self {
            client,
            wheres: Vec::new(),
            where_nots: Vec::new(),
            where_somes: Vec::new(),
            min_somes: 1,
            page_size: client.config().page_size(),
            attributes: Vec::new(),
            relation_attributes: Vec::new(),
            sorts: Vec::new(),
            aggregations: IndexMap::new(),
        }
    }

    /// Adds a predicate every result must match.
    pub fn where_(mut self, query: Query) -> Self {
        self.wheres.push(query);
        self
    }

    /// Adds a predicate no result may match.
    pub fn where_not(mut self, query: Query) -> Self {
        self.where_nots.push(query);
        self
    }

    /// Adds a predicate of which at least `min_somes` must match.
    pub fn where_some(mut self, query: Query) -> Self {
        self.where_somes.push(query);
        self
    }

    /// Number of `where_some` predicates each result must match.
    pub fn min_somes(mut self, count: u32) -> Self {
        self.min_somes = count;
        self
    }

    /// Results per page.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Returns an extra attribute on each result.
    pub fn include_on_results(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Returns an extra attribute on each related asset.
    pub fn include_on_relations(mut self, attribute: impl Into<String>) -> Self {
        self.relation_attributes.push(attribute.into());
        self
    }

    /// Adds a sort; sorts apply in the order added.
    pub fn sort(mut self, item: SortItem) -> Self {
        self.sorts.push(item);
        self
    }

    /// Adds a named aggregation.
    pub fn aggregate(mut self, name: impl Into<String>, aggregation: Aggregation) -> Self {
        self.aggregations.insert(name.into(), aggregation);
        self
    }

    /// Limits results to one asset type.
    pub fn asset_type(self, type_name: &str) -> Self {
        self.where_(fields::TYPE_NAME.eq(type_name))
    }

    /// Limits results to any of several asset types.
    pub fn asset_types<I, S>(self, type_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.where_(fields::TYPE_NAME.within(type_names))
    }

    /// Limits results to active (not archived) assets.
    pub fn active_assets(self) -> Self {
        self.where_(fields::STATE.eq(EntityStatus::Active.as_str()))
    }

    /// Limits results to assets carrying any of the tags, directly or, unless
    /// `direct_only`, through propagation.
    pub fn tagged<I, S>(self, tags: I, direct_only: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        let direct = fields::ATLAN_TAGS.within(tags.clone());
        if direct_only {
            self.where_(direct)
        } else {
            self.where_(direct.or(fields::PROPAGATED_ATLAN_TAGS.within(tags)))
        }
    }

    /// The query assembled from the predicates.
    pub fn to_query(&self) -> Query {
        if self.wheres.is_empty() && self.where_nots.is_empty() && self.where_somes.is_empty() {
            return Query::MatchAll;
        }
        Query::Bool(BoolQuery {
            must: Vec::new(),
            filter: self.wheres.clone(),
            should: self.where_somes.clone(),
            must_not: self.where_nots.clone(),
            minimum_should_match: (!self.where_somes.is_empty()).then_some(self.min_somes),
        })
    }

    /// The request for the first page.
    pub fn to_request(&self) -> IndexSearchRequest {
        let mut sort = self.sorts.clone();
        if !sort.iter().any(|s| s.field == fields::GUID.name()) {
            sort.push(fields::GUID.order(SortOrder::Asc));
        }
        IndexSearchRequest {
            dsl: Dsl {
                from: 0,
                size: self.page_size,
                query: self.to_query(),
                sort,
                aggregations: self.aggregations.clone(),
                track_total_hits: true,
            },
            attributes: self.attributes.clone(),
            relation_attributes: self.relation_attributes.clone(),
            ..Default::default()
        }
    }

    /// Runs the search and returns the first page.
    pub fn execute(&self) -> AtlanResult<IndexSearchResponse> {
        self.client.assets().search(&self.to_request())
    }

    /// Approximate number of matching assets.
    pub fn count(&self) -> AtlanResult<u64> {
        let mut request = self.to_request();
        request.dsl.size = 1;
        request.dsl.aggregations.clear();
        Ok(self.client.assets().search(&request)?.approximate_count)
    }

    /// The first matching asset, if any.
    pub fn first(&self) -> AtlanResult<Option<Asset>> {
        let mut request = self.to_request();
        request.dsl.size = 1;
        let response = self.client.assets().search(&request)?;
        Ok(response.entities.into_iter().next())
    }

    /// Every matching asset, fetched page by page as the iterator advances.
    pub fn stream(&self) -> AssetPager<'c> {
        AssetPager::new(self.client, self.to_request())
    }
}
