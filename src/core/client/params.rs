use url::Url;

/// Fixed query parameters sent with every product-card request.
///
/// The defaults reproduce the storefront's own request: prices in rubles, the
/// Moscow delivery region and the Russian locale. Override individual fields
/// through [`WbClientBuilder::params`](super::WbClientBuilder::params) to query
/// another region or currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogParams {
    /// Client application type (`appType`). `1` is the desktop web site.
    pub app_type: u32,
    /// Currency code (`curr`) in which prices are returned.
    pub currency: String,
    /// Destination / delivery region code (`dest`).
    pub dest: i64,
    /// Delivery-type filter (`hide_dtype`).
    pub hide_dtype: u32,
    /// Loyalty discount percent applied to prices (`spp`).
    pub spp: u32,
    /// Whether to opt into A/B experiments (`ab_testing`).
    pub ab_testing: bool,
    /// Response language (`lang`).
    pub lang: String,
}

impl Default for CatalogParams {
    fn default() -> Self {
        Self {
            app_type: 1,
            currency: "rub".to_string(),
            dest: -1_257_786,
            hide_dtype: 13,
            spp: 30,
            ab_testing: false,
            lang: "ru".to_string(),
        }
    }
}

impl CatalogParams {
    /// Appends the parameters to `url` in the order the storefront sends them,
    /// followed by `nm=<article>`.
    pub(crate) fn apply(&self, url: &mut Url, article: &str) {
        url.query_pairs_mut()
            .append_pair("appType", &self.app_type.to_string())
            .append_pair("curr", &self.currency)
            .append_pair("dest", &self.dest.to_string())
            .append_pair("hide_dtype", &self.hide_dtype.to_string())
            .append_pair("spp", &self.spp.to_string())
            .append_pair("ab_testing", if self.ab_testing { "true" } else { "false" })
            .append_pair("lang", &self.lang)
            .append_pair("nm", article);
    }
}
