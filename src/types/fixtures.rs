//! Captured CometBFT responses shared by the unit tests.

pub const BLOCK_RESPONSE: &str = r#"{
    "jsonrpc": "2.0",
    "id": -1,
    "result": {
        "block_id": {
            "hash": "6D9C6A6E2A3D4B1E2C3F4A5B6C7D8E9F0A1B2C3D4E5F60718293A4B5C6D7E8F9",
            "parts": {
                "total": 1,
                "hash": "0E1F2A3B4C5D6E7F8091A2B3C4D5E6F708192A3B4C5D6E7F8091A2B3C4D5E6F7"
            }
        },
        "block": {
            "header": {
                "version": {"block": "11", "app": "3"},
                "chain_id": "celestia",
                "height": "4217750",
                "time": "2025-03-14T09:26:53.589793254Z",
                "last_block_id": {
                    "hash": "A1B2C3D4E5F60718293A4B5C6D7E8F90A1B2C3D4E5F60718293A4B5C6D7E8F90",
                    "parts": {"total": 1, "hash": "1111"}
                },
                "last_commit_hash": "LCH",
                "data_hash": "DH",
                "validators_hash": "VH",
                "next_validators_hash": "NVH",
                "consensus_hash": "048091BC7DDC283F77BFBF91D73C44DA58C3DF8A9CBC867405D8B7F3DAADA22F",
                "app_hash": "9A5A7E4F7C2E1B0D3C6F8A9B0C1D2E3F405162738495A6B7C8D9E0F1A2B3C4D5",
                "last_results_hash": "LRH",
                "evidence_hash": "EH",
                "proposer_address": "F2A8A8BF4D5F0B7E6F0D1C2B3A495867F8E9D0C1"
            },
            "data": {
                "txs": ["CpIBCo8BChwvY29zbW9zLmJhbmsudjFiZXRhMS5Nc2dTZW5k", "Cg=="],
                "square_size": "2"
            },
            "evidence": {"evidence": []},
            "last_commit": {
                "height": "4217749",
                "round": 0,
                "block_id": {
                    "hash": "A1B2C3D4E5F60718293A4B5C6D7E8F90A1B2C3D4E5F60718293A4B5C6D7E8F90",
                    "parts": {"total": 1, "hash": "1111"}
                },
                "signatures": [
                    {
                        "block_id_flag": 2,
                        "validator_address": "F2A8A8BF4D5F0B7E6F0D1C2B3A495867F8E9D0C1",
                        "timestamp": "2025-03-14T09:26:53.51Z",
                        "signature": "c2lnbmF0dXJl"
                    },
                    {
                        "block_id_flag": 1,
                        "validator_address": "",
                        "timestamp": "0001-01-01T00:00:00Z",
                        "signature": null
                    }
                ]
            }
        }
    }
}"#;

pub const STATUS_RESPONSE: &str = r#"{
    "jsonrpc": "2.0",
    "id": -1,
    "result": {
        "node_info": {
            "protocol_version": {"p2p": "8", "block": "11", "app": "3"},
            "id": "0c6a6a3a2b1e4f5d9c8b7a6f5e4d3c2b1a0f9e8d",
            "listen_addr": "tcp://0.0.0.0:26656",
            "network": "celestia",
            "version": "1.44.0-tm-v0.34.35",
            "channels": "40202122233038606100",
            "moniker": "pops-rpc-1",
            "other": {"tx_index": "on", "rpc_address": "tcp://0.0.0.0:26657"}
        },
        "sync_info": {
            "latest_block_hash": "6D9C6A6E2A3D4B1E2C3F4A5B6C7D8E9F0A1B2C3D4E5F60718293A4B5C6D7E8F9",
            "latest_app_hash": "9A5A7E4F7C2E1B0D3C6F8A9B0C1D2E3F405162738495A6B7C8D9E0F1A2B3C4D5",
            "latest_block_height": "4217750",
            "latest_block_time": "2025-03-14T09:26:53.589793254Z",
            "earliest_block_hash": "6BE39EFD10BA412A9DB5288488303F5DD32CF386707A5BEF33617F4C43301872",
            "earliest_app_hash": "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855",
            "earliest_block_height": "1",
            "earliest_block_time": "2023-10-31T14:00:00Z",
            "catching_up": false
        },
        "validator_info": {
            "address": "5B1F1D1E9A6E7D3C2B4A59687F8E9D0C1B2A3948",
            "pub_key": {
                "type": "tendermint/PubKeyEd25519",
                "value": "x7nVvGvK0aYkJ6Yb1Qw8t3V9HhR0mS1cZ2pL4eN5oQk="
            },
            "voting_power": "0"
        }
    }
}"#;

pub const TX_RESPONSE: &str = r#"{
    "jsonrpc": "2.0",
    "id": -1,
    "result": {
        "hash": "DEADBEEF00112233445566778899AABBCCDDEEFF00112233445566778899AABB",
        "height": "4217750",
        "index": 3,
        "tx_result": {
            "code": 0,
            "data": "EiYKJC9jb3Ntb3MuYmFuay52MWJldGExLk1zZ1NlbmRSZXNwb25zZQ==",
            "log": "",
            "info": "",
            "gas_wanted": "200000",
            "gas_used": "81234",
            "events": [
                {
                    "type": "message",
                    "attributes": [
                        {"key": "YWN0aW9u", "value": "L2Nvc21vcy5iYW5rLnYxYmV0YTEuTXNnU2VuZA==", "index": true},
                        {"key": "c2VuZGVy", "value": "celestia1qxyz", "index": true}
                    ]
                },
                {
                    "type": "transfer",
                    "attributes": [
                        {"key": "YW1vdW50", "value": "MTAwMHV0aWE=", "index": true}
                    ]
                }
            ],
            "codespace": ""
        },
        "tx": "cmF3IHR4IGJ5dGVz"
    }
}"#;
