//! ABI bindings for the benchmarked contracts.

use alloy::sol;

sol! {
    interface MyERC20 {
        function transfer(address to, uint256 amount) external returns (bool);
    }

    interface StorageManipulator {
        function writeData(uint256 key, string calldata value) external;
        function performComplexCalculation(uint256 a, uint256 b, uint256 iterations) external;
    }
}
