use dealer_locator::{CsvDealerSource, DealerFilter, DealerProvider};
use geobounds::{
    cartesian_distance, create_map_bounds, is_location_within_boundary, Coordinate, GeoBoundary,
};

const DEALERS: &str = "\
id,name,addr1,city,state,zip,country,phone,website,online,lat,lng
SC-01,Surf City Cycles,131 Center St,Santa Cruz,CA,95060,USA,831-555-0131,https://surfcitycycles.example.com,true,36.9722,-122.0264
SC-02,Westside Boardworks,2222 Mission St,Santa Cruz,CA,95060,USA,831-555-0172,,false,36.9605,-122.0460
SJ-03,Valley Wheels,88 Almaden Blvd,San Jose,CA,95113,USA,,,true,37.3326,-121.8920
LA-04,Sunset Spokes,7100 Sunset Blvd,Los Angeles,CA,90046,USA,323-555-0140,https://sunsetspokes.example.com,true,34.0983,-118.3439
";

fn load_dealers() -> Vec<dealer_locator::Dealer> {
    CsvDealerSource::from_reader(DEALERS.as_bytes())
        .expect("bundled table should parse")
        .get_dealers()
        .expect("csv source is infallible")
}

#[test]
fn test_search_flow_fits_the_nearest_dealer_into_view() {
    let dealers = load_dealers();

    // A search lands between the two Santa Cruz shops; SC-02 is nearest.
    let search_hit = Coordinate::new(36.9650, -122.0500);
    let nearest = dealers
        .iter()
        .min_by(|a, b| {
            cartesian_distance(a.location, search_hit)
                .total_cmp(&cartesian_distance(b.location, search_hit))
        })
        .expect("table is not empty");
    assert_eq!(nearest.id, "SC-02");

    // The fitted bounds stay centered on the search hit and keep the
    // nearest dealer inside the closed rectangle.
    let bounds = create_map_bounds(search_hit, nearest.location);
    assert!(bounds.is_complete());

    let midpoint = bounds.center().expect("complete bounds have a center");
    assert!((midpoint.lat - search_hit.lat).abs() < 1e-9);
    assert!((midpoint.lng - search_hit.lng).abs() < 1e-9);

    let boundary = bounds.to_boundary().expect("complete bounds convert");
    assert!(boundary.north() >= nearest.location.lat);
    assert!(boundary.south() <= nearest.location.lat);
    assert!(boundary.east() >= nearest.location.lng);
    assert!(boundary.west() <= nearest.location.lng);
}

#[test]
fn test_list_emphasis_splits_dealers_by_viewport() {
    let dealers = load_dealers();

    // A viewport around Santa Cruz bay.
    let viewport = GeoBoundary::from_edges(37.1, 36.8, -121.9, -122.2);

    let on_map: Vec<_> = dealers
        .iter()
        .filter(|dealer| is_location_within_boundary(dealer.location, Some(&viewport)))
        .map(|dealer| dealer.id.as_str())
        .collect();
    let off_map: Vec<_> = dealers
        .iter()
        .filter(|dealer| !is_location_within_boundary(dealer.location, Some(&viewport)))
        .map(|dealer| dealer.id.as_str())
        .collect();

    assert_eq!(on_map, vec!["SC-01", "SC-02"]);
    assert_eq!(off_map, vec!["SJ-03", "LA-04"]);

    // Without a viewport nothing is emphasized.
    assert!(dealers
        .iter()
        .all(|dealer| !is_location_within_boundary(dealer.location, None)));
}

#[test]
fn test_online_filter_narrows_the_csv_table() {
    let dealers = load_dealers();
    let filter = {
        let mut filter = DealerFilter::online_dealers();
        filter.active = true;
        filter
    };

    let visible: Vec<_> = dealers
        .iter()
        .filter(|dealer| !filter.active || filter.matches(dealer))
        .map(|dealer| dealer.id.as_str())
        .collect();

    assert_eq!(visible, vec!["SC-01", "SJ-03", "LA-04"]);
}
