mod prints_manifest_contract;
mod rejects_invalid_input_contract;
mod strict_required_fields_contract;
mod writes_output_dir_contract;
