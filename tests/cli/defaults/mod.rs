mod renders_formats_contract;
