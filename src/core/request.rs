use crate::domain::model::TimeWindow;
use crate::domain::ports::ConfigProvider;

const OPERATION_NAME: &str = "findItemsAdvanced";
const SERVICE_VERSION: &str = "1.13.0";

/// Query parameters for a Finding API `findItemsAdvanced` call, in the
/// flattened `itemFilter(n).name` form the service expects. Results are
/// requested sorted by soonest-ending so the window filter sees them in
/// display order already.
pub fn search_params<C: ConfigProvider>(config: &C, window: &TimeWindow) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("OPERATION-NAME".into(), OPERATION_NAME.into()),
        ("SERVICE-VERSION".into(), SERVICE_VERSION.into()),
        ("SECURITY-APPNAME".into(), config.app_id().into()),
        ("RESPONSE-DATA-FORMAT".into(), "JSON".into()),
        ("keywords".into(), config.keywords().into()),
        ("sortOrder".into(), "EndTimeSoonest".into()),
        (
            "paginationInput.entriesPerPage".into(),
            config.entries_per_page().to_string(),
        ),
        ("paginationInput.pageNumber".into(), "1".into()),
    ];

    if let Some(category) = config.category_id() {
        params.push(("categoryId".into(), category.into()));
    }

    let mut filter = 0usize;
    if let Some(max_price) = config.max_price() {
        params.push((format!("itemFilter({filter}).name"), "MaxPrice".into()));
        params.push((format!("itemFilter({filter}).value"), max_price.into()));
        params.push((format!("itemFilter({filter}).paramName"), "Currency".into()));
        params.push((format!("itemFilter({filter}).paramValue"), "USD".into()));
        filter += 1;
    }

    params.push((format!("itemFilter({filter}).name"), "ListingType".into()));
    params.push((format!("itemFilter({filter}).value"), "Auction".into()));
    filter += 1;

    params.push((format!("itemFilter({filter}).name"), "EndTimeTo".into()));
    params.push((
        format!("itemFilter({filter}).value"),
        window
            .upper_bound()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
    ));

    params
}
