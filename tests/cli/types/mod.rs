mod lists_all_types_contract;
