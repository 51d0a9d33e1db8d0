use bstr::BString;

use viewnix::{
    DataSetType, Field, Header,
    header::{Body, Display, General, Scene, Structure},
};

/// General information with every field valid, for a data set of the given
/// type.
pub fn sample_general(data_set_type: DataSetType) -> General {
    let mut general = General::default();

    general.recognition_code = Field::new(BString::from("VIEWNIX1.0"));
    general.study_date = Field::new(BString::from("1989.01.06"));
    general.study_time = Field::new(BString::from("14:30:00"));
    general.data_type = Field::new(data_set_type.value());
    general.modality = Field::new(BString::from("CT"));
    general.institution = Field::new(BString::from("UNIV OF PENNSYLVANIA"));
    general.physician = Field::new(BString::from("DOE"));
    general.department = Field::new(BString::from("RADIOLOGY"));
    general.radiologist = Field::new(BString::from("ROE"));
    general.model = Field::new(BString::from("MODEL 9800"));
    general.filename = Field::new(BString::from("test.IM0"));
    general.filename1 = Field::new(BString::from("source.IM0"));
    general.description = Field::new(BString::from("interpolated head study"));
    general.comment = Field::new(BString::from("no comment"));
    general.patient_name = Field::new(BString::from("DOE, JANE"));
    general.patient_id = Field::new(BString::from("12345678"));
    general.slice_thickness = Field::new(1.5);
    general.kvp = Field::new([120.0, 0.0]);
    general.repetition_time = Field::new(0.0);
    general.echo_time = Field::new(0.0);
    general.imaged_nucleus = Field::new(BString::from("1H"));
    general.gantry_tilt = Field::new(0.0);
    general.study = Field::new(BString::from("1"));
    general.series = Field::new(BString::from("2"));
    general.gray_descriptor = Field::new([4, 0, 16]);
    general.red_descriptor = Field::new([4, 0, 16]);
    general.green_descriptor = Field::new([4, 0, 16]);
    general.blue_descriptor = Field::new([4, 0, 16]);
    general.gray_lookup_data = Field::new(vec![0, 16384, 32768, 49152]);
    general.red_lookup_data = Field::new(vec![0, 16384, 32768, 49152]);
    general.green_lookup_data = Field::new(vec![0, 16384, 32768, 49152]);
    general.blue_lookup_data = Field::new(vec![0, 16384, 32768, 49152]);

    general
}

/// A three-dimensional scene header with every field valid.
pub fn sample_scene_header() -> Header {
    let mut scene = Scene::default();

    scene.dimension = Field::new(3);
    scene.domain = Field::new(vec![
        0.0, 0.0, 0.0, // origin
        1.0, 0.0, 0.0, // x
        0.0, 1.0, 0.0, // y
        0.0, 0.0, 1.0, // z
    ]);
    scene.axis_label = Field::new(vec![
        BString::from("x"),
        BString::from("y"),
        BString::from("z"),
    ]);
    scene.measurement_unit = Field::new(vec![3, 3, 3]);
    scene.num_of_density_values = Field::new(1);
    scene.density_measurement_unit = Field::new(vec![0]);
    scene.smallest_density_value = Field::new(vec![0.0]);
    scene.largest_density_value = Field::new(vec![4095.0]);
    scene.num_of_integers = Field::new(1);
    scene.signed_bits = Field::new(vec![0]);
    scene.num_of_bits = Field::new(16);
    scene.bit_fields = Field::new(vec![0, 15]);
    scene.dimension_in_alignment = Field::new(2);
    scene.bytes_in_alignment = Field::new(1);
    scene.xysize = Field::new([256, 256]);
    scene.num_of_subscenes = Field::new(vec![12]);
    scene.xypixsz = Field::new([1.5, 1.5]);
    scene.loc_of_subscenes = Field::new((0..12).map(|k| k as f32 * 2.5).collect());
    scene.description = Field::new(BString::from("head scan"));

    Header {
        general: sample_general(DataSetType::Image1),
        body: Body::Scene(scene),
    }
}

/// A three-dimensional structure system header with every field valid.
pub fn sample_structure_header() -> Header {
    let mut structure = Structure::default();

    structure.dimension = Field::new(3);
    structure.num_of_structures = Field::new(2);
    structure.domain = Field::new(vec![
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, // first structure
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, // second structure
    ]);
    structure.axis_label = Field::new(vec![
        BString::from("x"),
        BString::from("y"),
        BString::from("z"),
    ]);
    structure.measurement_unit = Field::new(vec![3, 3, 3]);
    structure.scene_file = Field::new(vec![BString::from("a.IM0"), BString::from("b.IM0")]);
    structure.num_of_tse = Field::new(vec![1000, 2000]);
    structure.num_of_ntse = Field::new(vec![13, 13]);
    structure.num_of_components_in_tse = Field::new(9);
    structure.num_of_components_in_ntse = Field::new(1);
    structure.tse_measurement_unit = Field::new(vec![3; 9]);
    structure.ntse_measurement_unit = Field::new(vec![3]);
    structure.smallest_value = Field::new(vec![0.0; 18]);
    structure.largest_value = Field::new(vec![63.0; 18]);
    structure.num_of_integers_in_tse = Field::new(5);
    structure.signed_bits_in_tse = Field::new(vec![0, 0, 0, 1, 1]);
    structure.num_of_bits_in_tse = Field::new(32);
    structure.bit_fields_in_tse = Field::new(vec![
        0, 5, 6, 15, 16, 20, 21, 25, 26, 31, -1, -1, -1, -1, -1, -1, -1, -1,
    ]);
    structure.num_of_integers_in_ntse = Field::new(1);
    structure.signed_bits_in_ntse = Field::new(vec![0]);
    structure.num_of_bits_in_ntse = Field::new(16);
    structure.bit_fields_in_ntse = Field::new(vec![0, 15]);
    structure.num_of_samples = Field::new(vec![12]);
    structure.xysize = Field::new([256.0, 256.0]);
    structure.loc_of_samples = Field::new((0..12).map(|k| k as f32 * 2.5).collect());
    structure.num_of_elements = Field::new(1);
    structure.description_of_element = Field::new(vec![1]);
    structure.parameter_vectors = Field::new(vec![1.0, 2.0]);
    structure.min_max_coordinates = Field::new(vec![
        0.0, 256.0, 0.0, 256.0, 0.0, 30.0, // first structure
        0.0, 256.0, 0.0, 256.0, 0.0, 30.0, // second structure
    ]);
    structure.volume = Field::new(vec![100.0, 200.0]);
    structure.surface_area = Field::new(vec![50.0, 75.0]);
    structure.rate_of_change_volume = Field::new(vec![0.0, 0.0]);
    structure.description = Field::new(BString::from("bone surfaces"));

    Header {
        general: sample_general(DataSetType::Shell0),
        body: Body::Structure(structure),
    }
}

/// A display header with every field valid.
pub fn sample_display_header() -> Header {
    let mut display = Display::default();

    display.dimension = Field::new(3);
    display.measurement_unit = Field::new([3, 3]);
    display.num_of_elems = Field::new(1);
    display.smallest_value = Field::new(vec![0.0]);
    display.largest_value = Field::new(vec![255.0]);
    display.num_of_integers = Field::new(1);
    display.signed_bits = Field::new(vec![0]);
    display.num_of_bits = Field::new(8);
    display.bit_fields = Field::new(vec![0, 7]);
    display.dimension_in_alignment = Field::new(2);
    display.bytes_in_alignment = Field::new(1);
    display.num_of_images = Field::new(10);
    display.xysize = Field::new([640, 480]);
    display.xypixsz = Field::new([1.0, 1.0]);
    display.specification_pv = Field::new(BString::from("surface rendering"));
    display.pv = Field::new((0..10).map(|k| k * 36).collect());
    display.description = Field::new(BString::from("rotation movie"));

    Header {
        general: sample_general(DataSetType::Movie0),
        body: Body::Display(display),
    }
}
