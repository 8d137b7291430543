// Code generated by sfg. DO NOT EDIT.
#![allow(non_snake_case)]

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::Connection;

/// QueryRoot: The schema’s entry-point for queries. This acts as the public, top-level API from which all queries must start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRoot {
    /// Articles is a list of the shop's articles.
    #[serde(rename = "articles", skip_serializing_if = "Option::is_none", default)]
    pub Articles: Option<Connection<Article>>,
    /// Blog is a specific `Blog` by one of its unique attributes.
    #[serde(rename = "blog", skip_serializing_if = "Option::is_none", default)]
    pub Blog: Option<Box<Blog>>,
    /// Blogs is a list of the shop's blogs.
    #[serde(rename = "blogs", skip_serializing_if = "Option::is_none", default)]
    pub Blogs: Option<Connection<Blog>>,
    /// Node is a specific node by ID.
    #[serde(rename = "node", skip_serializing_if = "Option::is_none", default)]
    pub Node: Option<Box<Node>>,
    /// Nodes is the list of nodes with the given IDs.
    #[serde(rename = "nodes", skip_serializing_if = "Option::is_none", default)]
    pub Nodes: Option<Vec<Node>>,
    /// Product is a specific `Product` by one of its unique attributes.
    #[serde(rename = "product", skip_serializing_if = "Option::is_none", default)]
    pub Product: Option<Box<Product>>,
    /// Products is a list of the shop’s products.
    #[serde(rename = "products", skip_serializing_if = "Option::is_none", default)]
    pub Products: Option<Connection<Product>>,
    /// ProductTags is a list of tags that have been added to products.
    #[serde(rename = "productTags", skip_serializing_if = "Option::is_none", default)]
    pub ProductTags: Option<Connection<String>>,
    /// Shop is the shop associated with the storefront access token.
    #[serde(rename = "shop", skip_serializing_if = "Option::is_none", default)]
    pub Shop: Option<Box<Shop>>,
}

/// Node: An object with an ID field to support global identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Id is a globally-unique identifier.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none", default)]
    pub Id: Option<String>,
}

/// Shop: Shop represents a collection of the general settings and information about the shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    /// Description is a description of the shop.
    #[serde(rename = "description", skip_serializing_if = "Option::is_none", default)]
    pub Description: Option<String>,
    /// MoneyFormat is a string representing the way currency is formatted when the currency isn’t specified.
    #[serde(rename = "moneyFormat", skip_serializing_if = "Option::is_none", default)]
    pub MoneyFormat: Option<String>,
    /// Name is the shop’s name.
    #[serde(rename = "name", skip_serializing_if = "Option::is_none", default)]
    pub Name: Option<String>,
    /// PrimaryDomain is the primary domain of the shop’s Online Store.
    #[serde(rename = "primaryDomain", skip_serializing_if = "Option::is_none", default)]
    pub PrimaryDomain: Option<Box<Domain>>,
    /// ShipsToCountries is the countries that the shop ships to.
    #[serde(rename = "shipsToCountries", skip_serializing_if = "Option::is_none", default)]
    pub ShipsToCountries: Option<Vec<String>>,
}

/// Domain: Represents a web address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Host is the host name of the domain (eg: `example.com`).
    #[serde(rename = "host", skip_serializing_if = "Option::is_none", default)]
    pub Host: Option<String>,
    /// SSLEnabled is the whether SSL is enabled or not.
    #[serde(rename = "sslEnabled", skip_serializing_if = "Option::is_none", default)]
    pub SSLEnabled: Option<bool>,
    /// URL is the URL of the domain (eg: `https://example.com`).
    #[serde(rename = "url", skip_serializing_if = "Option::is_none", default)]
    pub URL: Option<String>,
}

/// Blog: An online store blog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    /// Articles is a list of the blog's articles.
    #[serde(rename = "articles", skip_serializing_if = "Option::is_none", default)]
    pub Articles: Option<Connection<Article>>,
    /// Handle is a human-friendly unique string for the Blog automatically generated from its title.
    #[serde(rename = "handle", skip_serializing_if = "Option::is_none", default)]
    pub Handle: Option<String>,
    /// Id is a globally-unique identifier.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none", default)]
    pub Id: Option<String>,
    /// OnlineStoreURL is the URL used for viewing the resource on the shop's Online Store. Returns `null` if the resource is currently not published to the Online Store sales channel.
    #[serde(rename = "onlineStoreUrl", skip_serializing_if = "Option::is_none", default)]
    pub OnlineStoreURL: Option<String>,
    /// Title is the blogs’s title.
    #[serde(rename = "title", skip_serializing_if = "Option::is_none", default)]
    pub Title: Option<String>,
}

/// Article: An article in an online store blog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Blog is the blog that the article belongs to.
    #[serde(rename = "blog", skip_serializing_if = "Option::is_none", default)]
    pub Blog: Option<serde_json::Value>,
    /// ContentHTML is the content of the article, complete with HTML formatting.
    #[serde(rename = "contentHtml", skip_serializing_if = "Option::is_none", default)]
    pub ContentHTML: Option<String>,
    /// Id is a globally-unique identifier.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none", default)]
    pub Id: Option<String>,
    /// Image is the image associated with the article.
    #[serde(rename = "image", skip_serializing_if = "Option::is_none", default)]
    pub Image: Option<Box<Image>>,
    /// PublishedAt is the date and time when the article was published.
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none", default)]
    pub PublishedAt: Option<DateTime<Utc>>,
    /// Tags is a categorization that a article can be tagged with.
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none", default)]
    pub Tags: Option<Vec<String>>,
    /// Title is the article’s title.
    #[serde(rename = "title", skip_serializing_if = "Option::is_none", default)]
    pub Title: Option<String>,
}

/// Image: Represents an image resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// AltText is a word or phrase to share the nature or contents of an image.
    #[serde(rename = "altText", skip_serializing_if = "Option::is_none", default)]
    pub AltText: Option<String>,
    /// Height is the original height of the image in pixels. Returns `null` if the image is not hosted by Shopify.
    #[serde(rename = "height", skip_serializing_if = "Option::is_none", default)]
    pub Height: Option<i64>,
    /// Deprecated: Src is the location of the image as a URL.
    #[serde(rename = "src", skip_serializing_if = "Option::is_none", default)]
    pub Src: Option<String>,
    /// URL is the location of the image as a URL.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none", default)]
    pub URL: Option<String>,
    /// Width is the original width of the image in pixels. Returns `null` if the image is not hosted by Shopify.
    #[serde(rename = "width", skip_serializing_if = "Option::is_none", default)]
    pub Width: Option<i64>,
}

/// Product: A product represents an individual item for sale in a Shopify store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// AvailableForSale indicates if at least one product variant is available for sale.
    #[serde(rename = "availableForSale", skip_serializing_if = "Option::is_none", default)]
    pub AvailableForSale: Option<bool>,
    /// CreatedAt is the date and time when the product was created.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    pub CreatedAt: Option<DateTime<Utc>>,
    /// DescriptionHTML is the description of the product, complete with HTML formatting.
    #[serde(rename = "descriptionHtml", skip_serializing_if = "Option::is_none", default)]
    pub DescriptionHTML: Option<String>,
    /// Handle is a human-friendly unique string for the Product automatically generated from its title.
    #[serde(rename = "handle", skip_serializing_if = "Option::is_none", default)]
    pub Handle: Option<String>,
    /// Id is a globally-unique identifier.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none", default)]
    pub Id: Option<String>,
    /// Tags is a categorization that a product can be tagged with. Added in admin.
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none", default)]
    pub Tags: Option<Vec<String>>,
    /// Title is the product’s title.
    #[serde(rename = "title", skip_serializing_if = "Option::is_none", default)]
    pub Title: Option<String>,
    /// Variants is a list of the product’s variants.
    #[serde(rename = "variants", skip_serializing_if = "Option::is_none", default)]
    pub Variants: Option<Connection<ProductVariant>>,
}

/// ProductVariant: A product variant represents a different version of a product, such as differing sizes or differing colors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// AvailableForSale indicates if the product variant is available for sale.
    #[serde(rename = "availableForSale", skip_serializing_if = "Option::is_none", default)]
    pub AvailableForSale: Option<bool>,
    /// CurrentlyNotInStock is whether a product is out of stock but still available for purchase (used for backorders).
    #[serde(rename = "currentlyNotInStock", skip_serializing_if = "Option::is_none", default)]
    pub CurrentlyNotInStock: Option<bool>,
    /// Id is a globally-unique identifier.
    #[serde(rename = "id", skip_serializing_if = "Option::is_none", default)]
    pub Id: Option<String>,
    /// Deprecated: Price is the product variant’s price.
    #[serde(rename = "price", skip_serializing_if = "Option::is_none", default)]
    pub Price: Option<String>,
    /// Product is the product object that the product variant belongs to.
    #[serde(rename = "product", skip_serializing_if = "Option::is_none", default)]
    pub Product: Option<serde_json::Value>,
    /// SKU is the SKU (stock keeping unit) associated with the variant.
    #[serde(rename = "sku", skip_serializing_if = "Option::is_none", default)]
    pub SKU: Option<String>,
    /// WeightUnit is the unit of measurement for weight.
    #[serde(rename = "weightUnit", skip_serializing_if = "Option::is_none", default)]
    pub WeightUnit: Option<String>,
}

/// PageInfo: Returns information about pagination in a connection, in accordance with the Relay specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// HasNextPage is whether there are more pages to fetch.
    #[serde(rename = "hasNextPage", skip_serializing_if = "Option::is_none", default)]
    pub HasNextPage: Option<bool>,
    /// HasPreviousPage is whether there are any pages prior to the current page.
    #[serde(rename = "hasPreviousPage", skip_serializing_if = "Option::is_none", default)]
    pub HasPreviousPage: Option<bool>,
}

/// ArticleSortKeys: The set of valid sort keys for the Article query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleSortKeys {
    #[serde(rename = "TITLE")]
    Title,
    #[serde(rename = "BLOG_TITLE")]
    BlogTitle,
    #[serde(rename = "AUTHOR")]
    Author,
    #[serde(rename = "UPDATED_AT")]
    UpdatedAt,
    #[serde(rename = "PUBLISHED_AT")]
    PublishedAt,
    #[serde(rename = "ID")]
    Id,
    #[serde(rename = "RELEVANCE")]
    Relevance,
}

/// MediaContentType: The possible content types for a media object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaContentType {
    #[serde(rename = "EXTERNAL_VIDEO")]
    ExternalVideo,
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "MODEL_3D")]
    Model3D,
    #[serde(rename = "VIDEO")]
    Video,
}
