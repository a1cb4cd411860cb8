use aqadvisor::core::protocol::{build_url, DEFAULT_ENDPOINT};
use aqadvisor::domain::model::SubmissionStep;
use aqadvisor::{FilterSelection, Stocking, Tank};

#[test]
fn test_stocking_resolves_free_text_names() {
    let input = [
        ("cardinal_tetra", 5),
        ("cory panda", 6),
        ("lemon_tetra", 12),
        ("pearl gourami", 4),
    ];

    let mut stocking = Stocking::new();
    for (name, quantity) in input {
        stocking.insert(name, quantity);
    }

    let resolved = stocking.resolved_stock();
    assert_eq!(resolved.len(), 4);
    assert_eq!(resolved.get("Cardinal Tetra (Paracheirodon axelrodi)"), Some(5));
    assert_eq!(resolved.get("Panda Cory (Corydoras panda)"), Some(6));
    assert_eq!(
        resolved.get("Lemon Tetra (Hyphessobrycon pulchripinnis)"),
        Some(12)
    );
    assert_eq!(resolved.get("Pearl Gourami (Trichogaster leerii)"), Some(4));
}

#[test]
fn test_distinct_inputs_collapse_to_later_quantity() {
    let stocking = Stocking::new()
        .add("pearl gourami", 4)
        .add("Trichogaster leerii", 2)
        .add("lemon tetra", 12);

    let resolved = stocking.resolved_stock();
    assert_eq!(stocking.raw_stock().len(), 3);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved.get("Pearl Gourami (Trichogaster leerii)"), Some(2));
}

#[test]
fn test_build_url_from_tank() {
    let expected = "http://aqadvisor.com/AqAdvisor.php?AquTankName=&AquListBoxTank=Choose&AquTankLength=20&AquTankDepth=10&AquTankHeight=12&AquListBoxFilter=Aquaclear%2030&AquTextFilterRate=30&AquListBoxFilter2=Choose&AquTextFilterRate2=N%2FA+&FormSubmit=Update&AquFilterString=&AquListBoxChooser=Cardinal%20Tetra%20%28Paracheirodon%20axelrodi%29&AquTextBoxQuantity=5&AquTextBoxRemoveQuantity=&AlreadySelected=&FilterMode=Display+all+species&AqTempUnit=F&AqVolUnit=gUS&AqLengthUnit=inch&AqSortType=cname&FilterQuantity=2&AqJuvMode=&AqSpeciesWindowSize=short&AqSearchMode=simple";

    let tank = Tank::new("10g")
        .select_filter("AquaClear 30")
        .attach_stocking(Stocking::new().add("cardinal tetra", 5));
    let (species, quantity) = tank.stocking().resolved_stock().iter().next().unwrap();

    let step = SubmissionStep {
        dimensions: tank.dimensions(),
        filter: tank.filter().unwrap(),
        species,
        quantity,
        already_selected: "",
    };
    assert_eq!(build_url(DEFAULT_ENDPOINT, &step), expected);
}

#[test]
fn test_tank_size_and_filter_lookup() {
    let tank = Tank::new("10g").select_filter("AquaClear 30");
    assert_eq!(tank.ldh(), Some(("20", "10", "12")));
    assert_eq!(
        tank.filter(),
        Some(&FilterSelection::new("Aquaclear 30", "30"))
    );

    let unknown = Tank::new("3g nano cube").select_filter("the one my friend gave me");
    assert_eq!(unknown.ldh(), None);
    assert_eq!(unknown.filter(), Some(&FilterSelection::not_found()));
}
