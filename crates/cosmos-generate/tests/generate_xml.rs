use std::fs;
use std::path::PathBuf;

use cosmos_generate::catalog::{FEDERATION, KLINGON_EMPIRE, ROMULAN_EMPIRE};
use cosmos_generate::entity::field;
use cosmos_generate::generators::{StarshipSynthesizer, Synthesizer};
use cosmos_generate::output::render_xml;
use cosmos_generate::{
    Catalog, ChaChaSource, CrewCatalogs, CrewRoster, DocumentBuilder, DocumentNode, EntityKind,
    Faction, GenerateOptions, GenerationEngine, GenerationError, GenerationRequest, Roster,
    build_document,
};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cosmos_generate_{label}_{}",
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn render(root: &DocumentNode) -> String {
    let mut buffer = Vec::new();
    render_xml(&mut buffer, root).expect("render xml");
    String::from_utf8(buffer).expect("utf-8 output")
}

/// Tag nesting without text, used to compare runs with different seeds.
fn shape(node: &DocumentNode) -> String {
    let children: Vec<String> = node.children().iter().map(shape).collect();
    format!("{}({})", node.tag(), children.join(","))
}

#[test]
fn crew_document_has_requested_number_of_members() {
    for count in [0, 1, 7, 250] {
        let request = GenerationRequest::crew("unused.xml", count);
        let mut rng = ChaChaSource::from_seed(count as u64);

        let root = build_document(&request, &mut rng).expect("build document");

        assert_eq!(root.tag(), "crew");
        assert_eq!(root.children().len(), count);
        for member in root.children() {
            assert_eq!(member.tag(), "crewmember");
            let tags: Vec<&str> = member.children().iter().map(DocumentNode::tag).collect();
            assert_eq!(tags, ["id", "nombre", "graduacion", "edad"]);
        }
    }
}

#[test]
fn single_rank_catalog_fills_every_member() {
    let ranks = Catalog::new("ranks", ["Cadete"]).expect("rank catalog");
    let request = GenerationRequest {
        roster: Roster::Crew(CrewRoster {
            count: 3,
            catalogs: CrewCatalogs::standard().with_ranks(ranks),
        }),
        output_path: PathBuf::from("unused.xml"),
    };
    let mut rng = ChaChaSource::from_seed(1);

    let root = build_document(&request, &mut rng).expect("build document");

    assert_eq!(root.children().len(), 3);
    for member in root.children() {
        assert_eq!(member.tag(), "crewmember");
        assert_eq!(member.child_text(field::RANK), Some("Cadete"));
    }
}

#[test]
fn fleet_is_partitioned_by_faction_in_order() {
    let request = GenerationRequest::fleet("unused.xml", 30);
    let mut rng = ChaChaSource::from_seed(77);

    let root = build_document(&request, &mut rng).expect("build document");

    assert_eq!(root.tag(), "starships");
    assert_eq!(root.children().len(), 90);
    let factions: Vec<&str> = root
        .children()
        .iter()
        .map(|ship| ship.child_text(field::FACTION).expect("faction"))
        .collect();
    assert!(factions[..30].iter().all(|label| *label == FEDERATION));
    assert!(factions[30..60].iter().all(|label| *label == ROMULAN_EMPIRE));
    assert!(factions[60..].iter().all(|label| *label == KLINGON_EMPIRE));

    for ship in root.children() {
        let tags: Vec<&str> = ship.children().iter().map(DocumentNode::tag).collect();
        assert_eq!(tags, ["id", "nombre", "faccion"]);
    }
}

#[test]
fn different_seeds_share_shape_but_not_values() {
    let request = GenerationRequest::fleet("unused.xml", 10);

    let first =
        build_document(&request, &mut ChaChaSource::from_seed(1)).expect("build first");
    let second =
        build_document(&request, &mut ChaChaSource::from_seed(2)).expect("build second");

    assert_eq!(shape(&first), shape(&second));
    assert_ne!(first, second);
}

#[test]
fn empty_roster_renders_self_closing_root() {
    let request = GenerationRequest::crew("unused.xml", 0);
    let root =
        build_document(&request, &mut ChaChaSource::from_seed(0)).expect("build document");

    assert_eq!(
        render(&root),
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n<crew/>\n"
    );
}

#[test]
fn render_indents_four_spaces_per_level_and_escapes_text() {
    let mut ship = DocumentNode::element("starship");
    ship.push(DocumentNode::leaf("id", "NCC-01701"));
    ship.push(DocumentNode::leaf("nombre", "Kirk & <Spock>"));
    let mut root = DocumentNode::element("starships");
    root.push(ship);

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n",
        "<starships>\n",
        "    <starship>\n",
        "        <id>NCC-01701</id>\n",
        "        <nombre>Kirk &amp; &lt;Spock&gt;</nombre>\n",
        "    </starship>\n",
        "</starships>\n",
    );
    assert_eq!(render(&root), expected);
}

#[test]
fn render_keeps_apostrophes_and_quotes_in_text() {
    let mut root = DocumentNode::element("starships");
    root.push(DocumentNode::leaf("nombre", "K'mpec \"B\""));

    let rendered = render(&root);

    assert!(
        rendered.contains("\n    <nombre>K'mpec \"B\"</nombre>\n"),
        "{rendered}"
    );
}

#[test]
fn builder_rejects_entities_of_another_kind() {
    let faction = Faction::klingon(1);
    let ship = StarshipSynthesizer::new(&faction).synthesize(&mut ChaChaSource::from_seed(4));
    let mut builder = DocumentBuilder::new(EntityKind::Crew);

    let result = builder.append(ship.clone());

    assert!(matches!(
        result,
        Err(GenerationError::KindMismatch {
            expected: EntityKind::Crew,
            found: EntityKind::Starship,
        })
    ));
    assert!(builder.is_empty());

    let mut fleet = DocumentBuilder::new(EntityKind::Starship);
    fleet.append(ship).expect("starship fits a starship document");
    assert_eq!(fleet.len(), 1);
}

#[test]
fn engine_writes_file_and_reports() {
    let out_dir = temp_out_dir("crew");
    let path = out_dir.join("crew.xml");
    let engine = GenerationEngine::new(GenerateOptions { seed: Some(9) });

    let report = engine
        .run(&GenerationRequest::crew(&path, 25))
        .expect("run generation");

    let written = fs::read_to_string(&path).expect("read crew.xml");
    assert_eq!(report.entities, 25);
    assert_eq!(report.seed, Some(9));
    assert_eq!(report.bytes_written, written.len() as u64);
    assert_eq!(written.matches("<crewmember>").count(), 25);
    assert!(written.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\""));
    assert!(written.contains("\n    <crewmember>\n        <id>ID-"));

    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["kind"], "crew");
}

#[test]
fn engine_is_reproducible_for_a_seed() {
    let out_dir = temp_out_dir("seeded");
    let path_a = out_dir.join("a.xml");
    let path_b = out_dir.join("b.xml");
    let engine = GenerationEngine::new(GenerateOptions { seed: Some(1234) });

    engine
        .run(&GenerationRequest::fleet(&path_a, 30))
        .expect("run generation A");
    engine
        .run(&GenerationRequest::fleet(&path_b, 30))
        .expect("run generation B");

    let a = fs::read_to_string(&path_a).expect("read a.xml");
    let b = fs::read_to_string(&path_b).expect("read b.xml");
    assert_eq!(a, b, "same seed should produce the same document");
}

#[test]
fn engine_without_seed_reports_drawn_seed() {
    let out_dir = temp_out_dir("entropy");
    let path = out_dir.join("starships.xml");

    let report = GenerationEngine::default()
        .run(&GenerationRequest::fleet(&path, 2))
        .expect("run generation");

    assert!(report.seed.is_some());
    assert_eq!(report.entities, 6);
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let out_dir = temp_out_dir("missing");
    let path = out_dir.join("does").join("not").join("exist").join("crew.xml");

    let result = GenerationEngine::default().run(&GenerationRequest::crew(&path, 3));

    assert!(matches!(result, Err(GenerationError::Io(_))));
}

#[test]
fn empty_output_path_is_rejected() {
    let result = GenerationEngine::default().run(&GenerationRequest::crew("", 3));
    assert!(matches!(result, Err(GenerationError::InvalidRequest(_))));
}
